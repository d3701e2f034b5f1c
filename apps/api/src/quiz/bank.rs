use crate::quiz::models::{Category, Question};

const APTITUDE_QUESTIONS: [Question; 5] = [
    Question {
        id: 1,
        prompt: "Which of the following best describes your problem-solving approach?",
        options: [
            "I prefer breaking down complex problems into smaller, manageable parts",
            "I like to visualize problems and think in patterns",
            "I enjoy working with numbers and data analysis",
            "I prefer discussing problems with others and exploring different perspectives",
        ],
        category: Category::Logical,
    },
    Question {
        id: 2,
        prompt: "What type of activities do you find most engaging?",
        options: [
            "Building or creating things with my hands",
            "Reading and writing about various topics",
            "Conducting experiments and research",
            "Organizing events and leading teams",
        ],
        category: Category::Verbal,
    },
    Question {
        id: 3,
        prompt: "In a group project, you typically:",
        options: [
            "Take charge and coordinate the team",
            "Focus on research and analysis",
            "Handle the creative and design aspects",
            "Ensure everyone stays on track with deadlines",
        ],
        category: Category::Spatial,
    },
    Question {
        id: 4,
        prompt: "Which subject area interests you most?",
        options: [
            "Mathematics and Statistics",
            "Literature and Languages",
            "Science and Technology",
            "Arts and Design",
        ],
        category: Category::Numerical,
    },
    Question {
        id: 5,
        prompt: "Your ideal work environment would be:",
        options: [
            "A collaborative office with team interactions",
            "A quiet space for focused, independent work",
            "A dynamic environment with varied challenges",
            "A creative studio or workshop setting",
        ],
        category: Category::Spatial,
    },
];

/// Immutable, ordered question list. Built once at start-up and shared via `AppState`.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The five-question aptitude assessment.
    pub fn aptitude() -> Self {
        Self {
            questions: APTITUDE_QUESTIONS.to_vec(),
        }
    }

    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Category of the question at `position`, if the bank has one there.
    pub fn category_of(&self, position: usize) -> Option<Category> {
        self.questions.get(position).map(|q| q.category)
    }
}
