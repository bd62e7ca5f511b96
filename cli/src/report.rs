use catalog_core::render_card;

use crate::fetch::FetchResult;

/// Everything one lookup prints, as a single block so concurrent lookups do
/// not interleave. Empty when the lookup matched nothing.
pub fn render_outcome(result: &FetchResult) -> String {
    match result {
        Ok(resp) => resp
            .cards()
            .iter()
            .map(|card| format!("\n{}\n", render_card(card)))
            .collect(),
        Err(e) => format!("Request failed with error: {e}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use catalog_core::{ApiError, CardRecord, CatalogResponse};

    #[test]
    fn empty_result_prints_nothing() {
        assert_eq!(render_outcome(&Ok(CatalogResponse::default())), "");
        let empty = CatalogResponse { cards: Some(Vec::new()) };
        assert_eq!(render_outcome(&Ok(empty)), "");
    }

    #[test]
    fn each_card_gets_a_block() {
        let resp = CatalogResponse {
            cards: Some(vec![
                CardRecord {
                    name: Some("Opt".to_string()),
                    ..CardRecord::default()
                },
                CardRecord::default(),
            ]),
        };
        let out = render_outcome(&Ok(resp));
        assert!(out.starts_with("\nCard Name: Opt\n"));
        assert_eq!(out.matches("Card Name: ").count(), 2);
        assert!(out.contains("\nCard Name: Unknown\n"));
    }

    #[test]
    fn failure_names_the_kind() {
        let out = render_outcome(&Err(FetchError::Api(ApiError::NotFound)));
        assert_eq!(out, "Request failed with error: not found (404)\n");

        let out = render_outcome(&Err(FetchError::MissingRequest));
        assert_eq!(out, "Request failed with error: no request to send\n");
    }
}
