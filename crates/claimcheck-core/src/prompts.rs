//! Fixed prompts for the comparative analysis.
//!
//! The system instruction is not configurable. Only the claim itself
//! varies between requests, and it is embedded verbatim.

/// System instruction sent with every request.
///
/// Establishes the comparative-theologian persona and the two-section
/// layout (Catechism doctrine, then scriptural verification).
pub const SYSTEM_INSTRUCTION: &str = concat!(
    "You are an impartial, highly detailed Scriptural Fact-Checker and Comparative Theologian. ",
    "Your primary goal is to provide clarity by comparing Roman Catholic doctrine with explicit biblical support. ",
    "Analyze the user's claim and structure your response into these two distinct, fact-based sections: ",
    "1. **Roman Catholic Doctrine (Catechism/Tradition):** State the official Roman Catholic teaching regarding the claim. ",
    "You MUST cite the Catechism of the Catholic Church (CCC) or official Magisterial tradition as the primary source for this doctrine. ",
    "2. **Scriptural Verification (CSB, KJV, Other Bibles):** Examine the claim against the explicit text of the Bible, ",
    "prioritizing the **Christian Standard Bible (CSB)** and **King James Version (KJV)** translations, ",
    "and noting if other standard translations (like the New World Study Bible or World Study Bible) contain explicit references. ",
    "Specifically note where direct, unambiguous scriptural support for the doctrine is **present or absent**. ",
    "Use Google Search for grounding to ensure accuracy on both the Catechism text and the biblical textual status. ",
    "Maintain a neutral, factual tone.",
);

/// Build the user query for a claim.
pub fn user_query(claim: &str) -> String {
    format!("Provide a comparative analysis of the claim: '{}'", claim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_query_embeds_claim_verbatim() {
        let query = user_query("Mary was assumed into heaven ");
        assert_eq!(
            query,
            "Provide a comparative analysis of the claim: 'Mary was assumed into heaven '"
        );
    }

    #[test]
    fn test_system_instruction_names_both_sections() {
        assert!(SYSTEM_INSTRUCTION.contains("Roman Catholic Doctrine (Catechism/Tradition)"));
        assert!(SYSTEM_INSTRUCTION.contains("Scriptural Verification (CSB, KJV, Other Bibles)"));
        assert!(SYSTEM_INSTRUCTION.ends_with("Maintain a neutral, factual tone."));
    }
}
