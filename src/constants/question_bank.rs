/// The built-in demo question bank, embedded as JSON and validated at
/// startup like any external bank would be.
pub const QUESTION_BANK_JSON: &str = r#"[
  {
    "id": 1,
    "type": "text",
    "prompt": "What is the capital of France?",
    "correctAnswerText": "paris"
  },
  {
    "id": 2,
    "type": "radio",
    "prompt": "2 + 2 = ?",
    "choices": ["3", "4", "5"],
    "correctChoiceIndex": 1
  },
  {
    "id": 3,
    "type": "checkbox",
    "prompt": "Select prime numbers",
    "choices": ["2", "3", "4", "5"],
    "correctChoiceIndexes": [0, 1, 3]
  },
  {
    "id": "q4",
    "type": "radio",
    "prompt": "The color of the sky on a clear day?",
    "choices": ["Green", "Blue", "Red"],
    "correctChoiceIndex": 1
  },
  {
    "id": "q5",
    "type": "text",
    "prompt": "Type the word \"hello\" in lowercase",
    "correctAnswerText": "hello"
  },
  {
    "id": "q6",
    "type": "checkbox",
    "prompt": "Select even numbers",
    "choices": ["1", "2", "3", "4"],
    "correctChoiceIndexes": [1, 3]
  },
  {
    "id": 7,
    "type": "radio",
    "prompt": "Largest planet?",
    "choices": ["Earth", "Jupiter", "Mars"],
    "correctChoiceIndex": 1
  },
  {
    "id": 8,
    "type": "text",
    "prompt": "Abbreviation for Cascading Style Sheets?",
    "correctAnswerText": "css"
  },
  {
    "id": "p1",
    "type": "radio",
    "prompt": "What is the output of the following code?\n```js\nconsole.log(typeof null)\n```",
    "choices": ["null", "object", "undefined", "number"],
    "correctChoiceIndex": 1
  },
  {
    "id": "p2",
    "type": "radio",
    "prompt": "What does this print?\n```js\nlet x = 0;\n(async () => {\n  x += await Promise.resolve(2);\n  console.log(x);\n})();\n```",
    "choices": ["0", "2", "NaN", "undefined"],
    "correctChoiceIndex": 1
  },
  {
    "id": "r1",
    "type": "radio",
    "prompt": "In React, which hook memoizes a computed value?",
    "choices": ["useEffect", "useMemo", "useCallback", "useRef"],
    "correctChoiceIndex": 1
  },
  {
    "id": "n1",
    "type": "radio",
    "prompt": "In Next.js App Router, components are by default…",
    "choices": ["Client Components", "Server Components", "Edge Components", "Static Components only"],
    "correctChoiceIndex": 1
  },
  {
    "id": "h1",
    "type": "radio",
    "prompt": "HoloJS is primarily associated with which platform?",
    "choices": ["HoloLens", "React Native", "Electron", "Chrome Extensions"],
    "correctChoiceIndex": 0
  }
]"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validation_service::ValidationService;

    #[test]
    fn embedded_bank_passes_validation() {
        let bank = ValidationService::validate_question_bank(QUESTION_BANK_JSON).unwrap();

        assert_eq!(bank.len(), 13);
    }
}
