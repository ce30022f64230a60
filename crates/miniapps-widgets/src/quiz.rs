#![forbid(unsafe_code)]

//! Quiz state machine.
//!
//! Walks a fixed ordered question sequence, tracking a running score.
//! Phases: `Idle → InProgress(i) → Answered(i) → … → Finished`, where
//! `Answered` is the between-questions pause with the feedback on screen.
//! `Finished` is terminal and re-enterable only through [`Quiz::start`].

/// One question record.
#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    /// Question text.
    pub prompt: &'static str,
    /// The four selectable options, in display order.
    pub options: [&'static str; 4],
    /// The correct answer; must be one of `options`.
    pub correct: &'static str,
}

impl QuizQuestion {
    /// Index of the correct option.
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|&o| o == self.correct)
            .unwrap_or(0)
    }
}

/// The fixed question set.
pub const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "Qual é a linguagem de marcação fundamental da web?",
        options: ["CSS", "Python", "HTML", "JavaScript"],
        correct: "HTML",
    },
    QuizQuestion {
        prompt: "Qual propriedade CSS muda a cor do texto?",
        options: ["background-color", "font-color", "color", "text-style"],
        correct: "color",
    },
    QuizQuestion {
        prompt: "Qual função JS exibe mensagem na console?",
        options: ["alert()", "console.log()", "print()", "display()"],
        correct: "console.log()",
    },
];

/// Where the quiz currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Nothing rendered yet; waiting for start.
    Idle,
    /// Question `question` is on screen, options selectable.
    InProgress {
        /// Index into the question sequence.
        question: usize,
    },
    /// Question answered; feedback shown, waiting for advance.
    Answered {
        /// Index of the question that was answered.
        question: usize,
        /// The option the user picked.
        selected: usize,
    },
    /// Sequence exhausted; completion message shown.
    Finished,
}

/// The quiz controller.
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: &'static [QuizQuestion],
    phase: QuizPhase,
    score: usize,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new(QUESTIONS)
    }
}

impl Quiz {
    /// Create a quiz over `questions`.
    #[must_use]
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        debug_assert!(
            questions
                .iter()
                .all(|q| q.options.contains(&q.correct)),
            "every correct answer must be one of its question's options"
        );
        Self {
            questions,
            phase: QuizPhase::Idle,
            score: 0,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Running score.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Total number of questions.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.questions.len()
    }

    /// Score rendered as `score/total`.
    #[must_use]
    pub fn score_display(&self) -> String {
        format!("{}/{}", self.score, self.total())
    }

    /// The question at `index`, when in range.
    #[must_use]
    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    /// (Re)start: reset score and position, show the first question.
    pub fn start(&mut self) {
        self.score = 0;
        self.phase = if self.questions.is_empty() {
            QuizPhase::Finished
        } else {
            QuizPhase::InProgress { question: 0 }
        };
    }

    /// Answer the current question with the option at `selected`.
    ///
    /// Only valid while a question is in progress; anything else is a
    /// no-op. Scores iff the selected option is the correct one.
    pub fn answer(&mut self, selected: usize) {
        let QuizPhase::InProgress { question } = self.phase else {
            return;
        };
        let Some(q) = self.questions.get(question) else {
            return;
        };
        if selected >= q.options.len() {
            return;
        }
        if selected == q.correct_index() {
            self.score += 1;
        }
        self.phase = QuizPhase::Answered { question, selected };
    }

    /// Advance past the feedback: next question, or `Finished` after the
    /// last one. A finished quiz stays finished.
    pub fn advance(&mut self) {
        match self.phase {
            QuizPhase::Answered { question, .. } => {
                let next = question + 1;
                self.phase = if next < self.questions.len() {
                    QuizPhase::InProgress { question: next }
                } else {
                    QuizPhase::Finished
                };
            }
            QuizPhase::Idle | QuizPhase::InProgress { .. } | QuizPhase::Finished => {}
        }
    }
}
