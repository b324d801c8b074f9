pub mod extractor_service;
pub mod generator_service;
pub mod option_randomizer;
pub mod quiz_parser;
pub mod quiz_service;
pub mod scoring_service;
