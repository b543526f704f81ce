pub const SYSTEM_PROMPT: &str = "You are a neutral mentor for traders. Produce a motivating yet realistic summary \
under 300 words. Avoid hype, avoid financial-advice phrasing, and highlight clear \
direction plus pitfalls.";

pub const SUMMARY_PROMPT_INTRO: &str = "You are a mentor helping someone navigate their trading journey.

Here are their quiz answers:";

pub const SUMMARY_PROMPT_INSTRUCTIONS: &str = "Write a concise, motivating, and realistic summary under 300 words.
Speak directly to the user in second person.
Include:
1) what likely fits them given their available time and style,
2) 2 to 4 concrete next steps for the coming week,
3) the single biggest trap they should avoid based on their frustration and risk tolerance.
Do not give financial advice. Do not promise results.
End with exactly one sentence that reinforces patience and process.";

/// Stands in for an answer that is blank. Validation normally prevents this.
pub const MISSING_ANSWER_PLACEHOLDER: &str = "(not provided)";
