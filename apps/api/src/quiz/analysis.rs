use serde::Serialize;

use crate::quiz::bank::QuestionBank;
use crate::quiz::models::{AnswerSet, Category, CategoryTally, RecommendationRecord};
use crate::quiz::recommendation::lookup_recommendation;
use crate::quiz::scoring::score_answers;

/// Scored quiz plus the record for its dominant category.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnalysis {
    pub dominant_skill: Category,
    pub scores: CategoryTally,
    pub recommendations: RecommendationRecord,
}

pub fn analyze_answers(answers: &AnswerSet, bank: &QuestionBank) -> QuizAnalysis {
    let score = score_answers(answers, bank);
    QuizAnalysis {
        dominant_skill: score.dominant,
        scores: score.tally,
        recommendations: lookup_recommendation(&score.dominant.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analysis_wire_shape() {
        let answers: AnswerSet = [(0, 0), (1, 0), (2, 2), (3, 0), (4, 2)].into_iter().collect();
        let analysis = analyze_answers(&answers, &QuestionBank::aptitude());
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["dominantSkill"], "spatial");
        assert_eq!(
            value["scores"],
            json!({"logical": 1, "verbal": 1, "numerical": 1, "spatial": 2})
        );
        assert_eq!(value["recommendations"]["stream"], "Creative & Design");
        assert_eq!(
            value["recommendations"]["careers"],
            json!(["Architect", "Graphic Designer", "UX Designer"])
        );
    }

    #[test]
    fn test_verbal_answers_recommend_humanities() {
        let answers: AnswerSet = [(1, 1)].into_iter().collect();
        let analysis = analyze_answers(&answers, &QuestionBank::aptitude());
        assert_eq!(analysis.dominant_skill, Category::Verbal);
        assert_eq!(analysis.recommendations.stream, "Humanities & Liberal Arts");
    }
}
