use crate::application::report::{CardTone, ChartBar, Estimate};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub struct ResultCardView {
    pub title: &'static str,
    pub value: String,
    pub color: egui::Color32,
    pub highlighted: bool,
}

pub struct ResultsViewModel {
    pub cards: Vec<ResultCardView>,
    pub bars: Vec<ChartBar>,
}

impl ResultsViewModel {
    pub fn from_estimate(estimate: &Estimate, currency_symbol: &str) -> Self {
        let cards = estimate
            .result_cards(currency_symbol)
            .into_iter()
            .enumerate()
            .map(|(i, card)| ResultCardView {
                title: card.title,
                value: card.value,
                color: Self::tone_color(card.tone),
                // The headline figure
                highlighted: i == 0,
            })
            .collect();

        Self {
            cards,
            bars: estimate.chart_bars(),
        }
    }

    fn tone_color(tone: CardTone) -> egui::Color32 {
        match tone {
            CardTone::Gain => DesignSystem::ACCENT_PRIMARY,
            CardTone::Loss => DesignSystem::DANGER,
            CardTone::Neutral => DesignSystem::TEXT_PRIMARY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::estimator::LeadEstimator;
    use crate::domain::inputs::InputSet;

    #[test]
    fn test_view_model_colors_by_tone() {
        let estimate = LeadEstimator::default()
            .estimate(&InputSet::sample())
            .unwrap();
        let vm = ResultsViewModel::from_estimate(&estimate, "$");

        assert_eq!(vm.cards.len(), 5);
        assert!(vm.cards[0].highlighted);
        assert_eq!(vm.cards[2].title, "Revenue at Risk");
        assert_eq!(vm.cards[2].color, DesignSystem::DANGER);
        assert_eq!(vm.bars.len(), 3);
    }
}
