use super::entities::{PropertyAttributes, SavedPrediction, User};
use super::valuation::{price_per_sqft, price_range};

/// UI-facing state shared across routes.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Signed-in identity, if any.
    pub user: Option<User>,
    /// Attributes behind the estimate currently on screen.
    pub last_attributes: Option<PropertyAttributes>,
    /// Estimate currently on screen; `None` shows the form.
    pub predicted_price: Option<f64>,
    /// Saved predictions for `user`, most recent first.
    pub saved: Vec<SavedPrediction>,
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id.as_str())
    }

    pub fn sign_in(&mut self, user: User, saved: Vec<SavedPrediction>) {
        self.user = Some(user);
        self.saved = saved;
    }

    /// Clears the identity and everything loaded for it.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.saved.clear();
    }

    pub fn show_prediction(&mut self, attrs: Option<PropertyAttributes>, price: f64) {
        self.last_attributes = attrs;
        self.predicted_price = Some(price);
    }

    pub fn reset_prediction(&mut self) {
        self.predicted_price = None;
    }

    pub fn result_summary(&self) -> Option<ResultSummary> {
        let price = self.predicted_price?;
        let (low, high) = price_range(price);
        let per_sqft = self
            .last_attributes
            .as_ref()
            .and_then(|attrs| price_per_sqft(price, attrs.area));
        Some(ResultSummary {
            price,
            low,
            high,
            per_sqft,
        })
    }
}

/// Figures shown on the result card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultSummary {
    pub price: f64,
    pub low: f64,
    pub high: f64,
    /// Unknown when the estimate was reopened from a saved record.
    pub per_sqft: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_out_drops_loaded_predictions() {
        let mut state = AppState::default();
        state.sign_in(
            User {
                id: "user_1".into(),
                email: "a@b.in".into(),
                name: None,
            },
            vec![SavedPrediction {
                id: 1,
                price: 1.0,
                date: String::new(),
                formatted_price: "₹1".into(),
            }],
        );
        assert_eq!(state.user_id(), Some("user_1"));
        state.sign_out();
        assert!(!state.is_authenticated());
        assert!(state.saved.is_empty());
    }

    #[test]
    fn summary_without_attributes_has_no_per_sqft() {
        let mut state = AppState::default();
        assert!(state.result_summary().is_none());
        state.show_prediction(None, 5_000_000.0);
        let summary = state.result_summary().unwrap();
        assert_eq!(summary.per_sqft, None);
        assert!((summary.high - 5_500_000.0).abs() < 1e-6);

        state.show_prediction(
            Some(PropertyAttributes {
                area: 1000.0,
                ..PropertyAttributes::default()
            }),
            5_000_000.0,
        );
        assert_eq!(state.result_summary().unwrap().per_sqft, Some(5000.0));
        state.reset_prediction();
        assert!(state.result_summary().is_none());
    }
}
