use platefinder_common::SearchRequest;

/// Output contract pinned in the prompt. Maps grounding does not combine
/// with forced tool responses, so the schema is enforced textually and the
/// parser stays strict on its side.
const OUTPUT_CONTRACT: &str = r#"Respond with a JSON array only — no prose before or after it, no markdown fences. Each element must have exactly these fields:
- "name": string — the venue's name, untranslated
- "quality_score": number — your overall quality judgment, 1.0 to 5.0
- "rating": number — the venue's platform star rating
- "review_count": integer — the venue's total review count
- "pros": array of exactly 3 short strings — positive themes
- "cons": array of exactly 3 short strings — negative themes
Never list the same venue twice."#;

const RANKING_RULES: &str = r#"Rank venues by reliability-weighted quality: weigh the rating by review volume, so a venue rated 4.3 across 2,000 reviews must rank above one rated 4.8 across 12 reviews. A lower rating backed by substantially more reviews outranks a higher rating backed by few reviews.

Summarize pros and cons as short themes drawn from review sentiment. Do not quote reviews verbatim."#;

/// Build the full instruction for one discovery call. Pure function of the
/// request.
pub fn compose(request: &SearchRequest) -> String {
    let mut prompt = format!(
        "Find real restaurants near the caller's location matching this craving: {}.\n\n",
        request.query.trim()
    );

    if !request.filters.is_empty() {
        prompt.push_str(&format!(
            "Only include venues satisfying all of these constraints: {}.\n\n",
            request.filters.join(", ")
        ));
    }

    prompt.push_str(RANKING_RULES);
    prompt.push_str("\n\n");

    if request.language.code != "en" {
        if request.language.rtl {
            prompt.push_str(&format!(
                "Language requirement: \"{}\" is written right-to-left. Every string in \"pros\" and \"cons\" must be written in {}, in its native script. Venue names must remain untranslated, in their original language and script.\n\n",
                request.language.code, request.language.code
            ));
        } else {
            prompt.push_str(&format!(
                "Write every string in \"pros\" and \"cons\" in {}. Venue names must remain untranslated.\n\n",
                request.language.code
            ));
        }
    }

    prompt.push_str(OUTPUT_CONTRACT);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use platefinder_common::ResponseLanguage;

    #[test]
    fn prompt_states_ranking_objective() {
        let prompt = compose(&SearchRequest::new(1.0, 1.0, "ramen"));
        assert!(prompt.contains("reliability-weighted"));
        assert!(prompt.contains("substantially more reviews"));
    }

    #[test]
    fn prompt_pins_field_set_and_forbids_duplicates() {
        let prompt = compose(&SearchRequest::new(1.0, 1.0, "ramen"));
        for field in ["name", "quality_score", "rating", "review_count", "pros", "cons"] {
            assert!(prompt.contains(field), "missing field {field}");
        }
        assert!(prompt.contains("Never list the same venue twice"));
    }

    #[test]
    fn prompt_embeds_filters() {
        let mut request = SearchRequest::new(1.0, 1.0, "ramen");
        request.filters = vec!["vegan".to_string(), "outdoor seating".to_string()];
        let prompt = compose(&request);
        assert!(prompt.contains("vegan, outdoor seating"));
    }

    #[test]
    fn rtl_language_gets_explicit_directive() {
        let mut request = SearchRequest::new(1.0, 1.0, "shawarma");
        request.language = ResponseLanguage::new("ar");
        let prompt = compose(&request);
        assert!(prompt.contains("right-to-left"));
        assert!(prompt.contains("remain untranslated"));
    }

    #[test]
    fn english_gets_no_language_directive() {
        let prompt = compose(&SearchRequest::new(1.0, 1.0, "ramen"));
        assert!(!prompt.contains("right-to-left"));
    }
}
