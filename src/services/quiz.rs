//! Mood assessment quiz: five fixed questions, each option tagged with one
//! of six mood categories. Answers are folded into a dominant-mood profile.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Quiz mood categories, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMood {
    Energetic,
    Calm,
    Anxious,
    Happy,
    Melancholic,
    Hopeful,
}

impl QuizMood {
    pub const ALL: [QuizMood; 6] = [
        QuizMood::Energetic,
        QuizMood::Calm,
        QuizMood::Anxious,
        QuizMood::Happy,
        QuizMood::Melancholic,
        QuizMood::Hopeful,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Energetic => "energetic",
            Self::Calm => "calm",
            Self::Anxious => "anxious",
            Self::Happy => "happy",
            Self::Melancholic => "melancholic",
            Self::Hopeful => "hopeful",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for QuizMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    High,
    Medium,
    Low,
}

impl From<QuizMood> for EnergyLevel {
    fn from(mood: QuizMood) -> Self {
        match mood {
            QuizMood::Energetic => Self::High,
            QuizMood::Calm => Self::Medium,
            _ => Self::Low,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizOption {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing)]
    pub mood: QuizMood,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub options: [QuizOption; 6],
}

impl QuizQuestion {
    pub fn option(&self, value: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

const fn opt(value: &'static str, label: &'static str, mood: QuizMood) -> QuizOption {
    QuizOption { value, label, mood }
}

use QuizMood::{Anxious, Calm, Energetic, Happy, Hopeful, Melancholic};

pub static QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        id: "morning-feeling",
        question: "How did you feel when you woke up this morning?",
        options: [
            opt("excited", "Excited and ready for the day", Energetic),
            opt("peaceful", "Calm and peaceful", Calm),
            opt("worried", "Anxious or worried", Anxious),
            opt("content", "Happy and content", Happy),
            opt("reflective", "Thoughtful and introspective", Melancholic),
            opt("optimistic", "Hopeful about what's ahead", Hopeful),
        ],
    },
    QuizQuestion {
        id: "social-energy",
        question: "How have you been feeling socially lately?",
        options: [
            opt("outgoing", "Eager to connect with others", Energetic),
            opt("balanced", "Comfortable and balanced", Calm),
            opt("overwhelmed", "Overwhelmed by social interaction", Anxious),
            opt("joyful", "Enjoying meaningful time with friends", Happy),
            opt("withdrawn", "Preferring solitude and reflection", Melancholic),
            opt("reconnecting", "Thinking about reconnecting with people", Hopeful),
        ],
    },
    QuizQuestion {
        id: "environment-impact",
        question: "How does your current environment make you feel?",
        options: [
            opt("motivated", "It energizes and inspires me", Energetic),
            opt("soothing", "It feels relaxing and comforting", Calm),
            opt("distracting", "It makes me feel uneasy or distracted", Anxious),
            opt("uplifting", "It brings a smile to my face", Happy),
            opt("dull", "It feels dull or uninspiring", Melancholic),
            opt("refreshing", "It gives me hope for a fresh start", Hopeful),
        ],
    },
    QuizQuestion {
        id: "thought-patterns",
        question: "What kind of thoughts have been on your mind today?",
        options: [
            opt("active-ideas", "New ideas and projects", Energetic),
            opt("peace", "Moments of peace and clarity", Calm),
            opt("worry", "Concerns about things going wrong", Anxious),
            opt("gratitude", "Appreciation for the little things", Happy),
            opt("deep-thinking", "Reflecting on past experiences", Melancholic),
            opt("possibilities", "Dreaming about the future", Hopeful),
        ],
    },
    QuizQuestion {
        id: "ideal-activity",
        question: "What sounds most appealing to you right now?",
        options: [
            opt("adventure", "An exciting adventure or new project", Energetic),
            opt("nature", "A peaceful walk in nature", Calm),
            opt("comfort", "Staying in my comfort zone", Anxious),
            opt("celebration", "Celebrating life with loved ones", Happy),
            opt("solitude", "Quiet time for deep thinking", Melancholic),
            opt("planning", "Planning for future goals", Hopeful),
        ],
    },
];

pub const DEFAULT_PROFILE_NAME: &str = "Quiz Taker";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizProfile {
    pub name: String,
    pub age: String,
    pub current_challenge: String,
    pub dream_goal: String,
    pub energy_level: EnergyLevel,
    pub recent_feeling: QuizMood,
    pub motivation: String,
}

impl QuizProfile {
    fn for_mood(name: &str, dominant: QuizMood) -> Self {
        Self {
            name: name.to_string(),
            age: "25-35".into(),
            current_challenge: format!("Feeling {dominant}"),
            dream_goal: "Finding inner balance".into(),
            energy_level: dominant.into(),
            recent_feeling: dominant,
            motivation: "Personal growth".into(),
        }
    }
}

/// Count tagged answers per category. Unknown questions or options add nothing.
pub fn mood_counts(answers: &HashMap<String, String>) -> [u32; 6] {
    let mut counts = [0u32; 6];
    for (question_id, value) in answers {
        let tagged = QUESTIONS
            .iter()
            .find(|q| q.id == question_id)
            .and_then(|q| q.option(value));
        if let Some(option) = tagged {
            counts[option.mood.index()] += 1;
        }
    }
    counts
}

/// Highest count wins; ties go to the category earliest in [`QuizMood::ALL`].
pub fn dominant_mood(counts: &[u32; 6]) -> QuizMood {
    let mut best = QuizMood::ALL[0];
    for mood in QuizMood::ALL.iter().skip(1) {
        if counts[mood.index()] > counts[best.index()] {
            best = *mood;
        }
    }
    best
}

pub fn aggregate(answers: &HashMap<String, String>, name: &str) -> QuizProfile {
    let dominant = dominant_mood(&mood_counts(answers));
    QuizProfile::for_mood(name, dominant)
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QuizError {
    #[error("Please answer question {0} before continuing")]
    Unanswered(usize),

    #[error("Unknown option '{value}' for question '{question}'")]
    UnknownOption { question: String, value: String },

    #[error("The quiz is already complete")]
    AlreadyComplete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizStep {
    AnsweringQuestion(usize),
    Complete(QuizProfile),
}

/// Step-gated walk through [`QUESTIONS`]. Going back keeps recorded answers.
#[derive(Debug, Clone)]
pub struct QuizWizard {
    name: String,
    answers: HashMap<String, String>,
    step: QuizStep,
}

impl QuizWizard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            answers: HashMap::new(),
            step: QuizStep::AnsweringQuestion(0),
        }
    }

    pub fn step(&self) -> &QuizStep {
        &self.step
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        match self.step {
            QuizStep::AnsweringQuestion(index) => QUESTIONS.get(index),
            QuizStep::Complete(_) => None,
        }
    }

    /// Percent through the quiz, counting the current question.
    pub fn progress(&self) -> f64 {
        match self.step {
            QuizStep::AnsweringQuestion(index) => {
                (index + 1) as f64 / QUESTIONS.len() as f64 * 100.0
            }
            QuizStep::Complete(_) => 100.0,
        }
    }

    pub fn record_answer(&mut self, value: &str) -> Result<(), QuizError> {
        let question = self.current_question().ok_or(QuizError::AlreadyComplete)?;
        if question.option(value).is_none() {
            return Err(QuizError::UnknownOption {
                question: question.id.to_string(),
                value: value.to_string(),
            });
        }
        self.answers
            .insert(question.id.to_string(), value.to_string());
        Ok(())
    }

    pub fn is_current_step_valid(&self) -> bool {
        self.current_question()
            .map(|q| self.answers.contains_key(q.id))
            .unwrap_or(false)
    }

    pub fn advance(&mut self) -> Result<&QuizStep, QuizError> {
        let QuizStep::AnsweringQuestion(index) = self.step else {
            return Err(QuizError::AlreadyComplete);
        };
        if !self.is_current_step_valid() {
            return Err(QuizError::Unanswered(index + 1));
        }
        self.step = if index + 1 < QUESTIONS.len() {
            QuizStep::AnsweringQuestion(index + 1)
        } else {
            QuizStep::Complete(aggregate(&self.answers, &self.name))
        };
        Ok(&self.step)
    }

    /// No-op on the first question or once complete.
    pub fn back(&mut self) {
        if let QuizStep::AnsweringQuestion(index) = self.step {
            if index > 0 {
                self.step = QuizStep::AnsweringQuestion(index - 1);
            }
        }
    }

    /// Rebuild a wizard standing on question `index` (clamped to the last
    /// question). Earlier questions must all be answered; the current one
    /// picks up its answer if `answers` has it.
    pub fn resume(
        name: &str,
        answers: &HashMap<String, String>,
        index: usize,
    ) -> Result<Self, QuizError> {
        let index = index.min(QUESTIONS.len() - 1);
        let mut wizard = Self::new(name);
        for position in 0..=index {
            let question = &QUESTIONS[position];
            if let Some(value) = answers.get(question.id) {
                wizard.record_answer(value)?;
            }
            if position < index {
                wizard.advance()?;
            }
        }
        Ok(wizard)
    }

    /// Replay a full answer map in question order.
    pub fn run(name: &str, answers: &HashMap<String, String>) -> Result<QuizProfile, QuizError> {
        let mut wizard = Self::new(name);
        for (index, question) in QUESTIONS.iter().enumerate() {
            let value = answers
                .get(question.id)
                .ok_or(QuizError::Unanswered(index + 1))?;
            wizard.record_answer(value)?;
            wizard.advance()?;
        }
        match wizard.step {
            QuizStep::Complete(profile) => Ok(profile),
            QuizStep::AnsweringQuestion(index) => Err(QuizError::Unanswered(index + 1)),
        }
    }
}
