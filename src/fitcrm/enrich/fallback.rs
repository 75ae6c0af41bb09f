//! Built-in exercise lists, one per goal offered on the client form.

use crate::model::{ExerciseSuggestion, DEFAULT_GOAL};

type Entry = (&'static str, &'static str);

const WEIGHT_LOSS: [Entry; 5] = [
    (
        "High-Intensity Interval Training (HIIT)",
        "Alternating short bursts of intense exercise with recovery periods for maximum calorie burn.",
    ),
    (
        "Jump Rope",
        "Effective cardio exercise that burns calories quickly and improves coordination.",
    ),
    (
        "Burpees",
        "Full-body exercise combining strength and cardio for efficient fat burning.",
    ),
    (
        "Mountain Climbers",
        "Dynamic core and cardio exercise that elevates heart rate.",
    ),
    (
        "Cycling",
        "Low-impact cardio perfect for sustained calorie burning and endurance.",
    ),
];

const MUSCLE_GAIN: [Entry; 5] = [
    (
        "Barbell Squats",
        "Compound exercise targeting quads, hamstrings, and glutes for lower body mass.",
    ),
    (
        "Bench Press",
        "Essential upper body exercise for chest, shoulders, and triceps development.",
    ),
    (
        "Deadlifts",
        "Full-body compound lift building overall strength and muscle mass.",
    ),
    ("Pull-ups", "Bodyweight exercise for back and bicep development."),
    (
        "Overhead Press",
        "Shoulder-focused compound movement for upper body strength.",
    ),
];

const GENERAL_FITNESS: [Entry; 5] = [
    (
        "Push-ups",
        "Classic upper body exercise targeting chest, shoulders, and triceps.",
    ),
    ("Squats", "Fundamental lower body exercise for legs and glutes."),
    (
        "Plank",
        "Core strengthening exercise building stability and endurance.",
    ),
    (
        "Lunges",
        "Single-leg exercise improving balance and leg strength.",
    ),
    (
        "Yoga Flow",
        "Flexibility and mindfulness practice improving overall wellness.",
    ),
];

fn entries(goal: &str) -> Option<&'static [Entry]> {
    match goal {
        "Weight Loss" => Some(&WEIGHT_LOSS),
        "Muscle Gain" => Some(&MUSCLE_GAIN),
        "General Fitness" => Some(&GENERAL_FITNESS),
        _ => None,
    }
}

/// The table key actually used for `goal`: the goal itself when it has a
/// dedicated list, otherwise [`DEFAULT_GOAL`].
pub fn table_key(goal: &str) -> &str {
    if entries(goal).is_some() {
        goal
    } else {
        DEFAULT_GOAL
    }
}

pub fn suggestions_for(goal: &str) -> Vec<ExerciseSuggestion> {
    entries(goal)
        .unwrap_or(&GENERAL_FITNESS)
        .iter()
        .map(|(name, desc)| ExerciseSuggestion::new(*name, *desc))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KNOWN_GOALS;

    #[test]
    fn every_known_goal_has_its_own_list() {
        for goal in KNOWN_GOALS {
            assert_eq!(table_key(goal), goal);
            assert_eq!(suggestions_for(goal).len(), 5);
        }
    }

    #[test]
    fn unknown_goal_uses_general_fitness() {
        assert_eq!(table_key("Flexibility"), "General Fitness");
        assert_eq!(
            suggestions_for("Flexibility"),
            suggestions_for("General Fitness")
        );
    }

    #[test]
    fn goal_lookup_is_exact() {
        assert_eq!(table_key("muscle gain"), "General Fitness");
        assert_eq!(suggestions_for("Muscle Gain")[0].name, "Barbell Squats");
    }
}
