/// Number of questions requested from the model and required from the parser.
pub const QUESTION_COUNT: usize = 5;

/// Number of answer options shown for each question.
pub const OPTION_COUNT: usize = 3;

pub const QUIZ_GENERATION_PROMPT: &str = "You are a helpful assistant programmed to generate questions based on any text provided. For every chunk of text you receive, you're tasked with designing 5 distinct questions. Each of these questions will be accompanied by 3 possible answers: one correct answer and two incorrect ones.

### Output Format:

For clarity and ease of processing, structure your response as a JSON array of arrays.

1. An outer array that contains exactly 5 inner arrays.
2. Each inner array represents a question and its answers, and contains exactly 4 strings in this order:
   - The generated question.
   - The correct answer.
   - The first incorrect answer.
   - The second incorrect answer.

Your output should mirror this structure:
[
    [\"Generated Question 1\", \"Correct Answer 1\", \"Incorrect Answer 1.1\", \"Incorrect Answer 1.2\"],
    [\"Generated Question 2\", \"Correct Answer 2\", \"Incorrect Answer 2.1\", \"Incorrect Answer 2.2\"],
    ...
]

### Rules:

- Use double quotes for every string and escape any double quote inside a string.
- The three answers of a question must all be different from each other.
- No answer may be empty.
- Do not wrap the array in markdown code fences.
- Do not include any prose or commentary before or after the array.

It is crucial that you adhere to this format as your output is parsed by a strict JSON decoder.";
