use crate::domain::ListingInput;

/// Instructions describing the scoring task and the JSON shape we hope to get back.
pub const ANALYST_INSTRUCTIONS: &str = r#"You are a commercial real estate investment analyst looking for value-add and opportunistic deals.
Read the listing and look for signals in three categories:

1. Seller Motivation: signs the seller wants to sell quickly or on favorable terms.
2. Transaction Complexity: factors that thin out buyer competition or create unusual opportunities.
3. Property Characteristics: value-add potential, or perceived risk that exceeds actual risk.

Score each category from 1 to 10 by the strength and number of signals. Give a short explanation
for every score and the keywords or phrases from the listing that support it.

The total score is a weighted average: 40% Seller Motivation + 30% Transaction Complexity + 30% Property Characteristics.

Respond with a JSON object:
{
  "seller_motivation_score": <1-10>,
  "transaction_complexity_score": <1-10>,
  "property_characteristics_score": <1-10>,
  "total_score": <1-10>,
  "seller_motivation_analysis": { "explanation": "<text>", "keywords": ["<keyword>", ...] },
  "transaction_complexity_analysis": { "explanation": "<text>", "keywords": ["<keyword>", ...] },
  "property_characteristics_analysis": { "explanation": "<text>", "keywords": ["<keyword>", ...] },
  "summary": "<short investment recommendation>"
}

Signals to watch for:
- Seller Motivation: "motivated seller", "must sell", "priced to sell", "urgent sale", relocation,
  price reductions, distress, bankruptcy, liquidation, retiring or passive owners, estate sales, deadlines.
- Transaction Complexity: title or legal issues, foreclosures, short sales, REO, portfolio sales,
  zoning or entitlement questions, environmental concerns, special financing, off-market deals,
  unusual lease structures.
- Property Characteristics: below market rents or occupancy, deferred maintenance, mismanagement,
  dated systems, repositioning, excess land, below replacement cost, older Class B/C assets,
  unusual property types with a thin buyer pool.

Stick to objective signals in the listing text."#;

/// The listing itself, as the user turn of the conversation.
pub fn listing_prompt(listing: &ListingInput) -> String {
    format!(
        "Property: {}\nType: {}\nLocation: {}\nPrice: {}\n\nDescription:\n{}\n\n\
         Analyze this listing and return the scores, explanations and keywords as JSON.",
        listing.display_name(),
        listing.display_type(),
        listing.display_location(),
        listing.display_price(),
        listing.description.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_prompt_includes_every_field() {
        let listing = ListingInput {
            name: "Oak Plaza".into(),
            property_type: "Retail".into(),
            location: "Austin, TX".into(),
            price: "$1,200,000".into(),
            description: "  Owner must sell.  ".into(),
        };
        let prompt = listing_prompt(&listing);

        assert!(prompt.starts_with("Property: Oak Plaza\nType: Retail\n"));
        assert!(prompt.contains("Location: Austin, TX"));
        assert!(prompt.contains("Price: $1,200,000"));
        assert!(prompt.contains("Description:\nOwner must sell.\n"));
        assert!(prompt.ends_with("as JSON."));
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let listing = ListingInput {
            description: "Vacant lot.".into(),
            ..Default::default()
        };
        let prompt = listing_prompt(&listing);
        assert!(prompt.contains("Property: Unnamed Property"));
        assert!(prompt.contains("Price: N/A"));
    }

    #[test]
    fn instructions_ask_for_json() {
        assert!(ANALYST_INSTRUCTIONS.contains("JSON"));
        assert!(ANALYST_INSTRUCTIONS.contains("40% Seller Motivation"));
    }
}
