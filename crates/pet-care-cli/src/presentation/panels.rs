//! Care panel rendering.

use std::fmt::Write;

use console::style;
use pet_care_core::models::{FeedingRecord, PlayActivityRecord, TemperatureRecord, ToyRecord};
use pet_care_core::panels::{BadgeStyle, CarePanels, PanelView};

use super::{badge, separator};

const RULE_WIDTH: usize = 60;

/// Render all four panels in display order.
pub fn render_panels(panels: &CarePanels) -> String {
    let mut out = String::new();
    render_view(&mut out, &panels.feeding, render_feeding);
    render_view(&mut out, &panels.temperature, render_temperature);
    render_view(&mut out, &panels.play, render_play);
    render_view(&mut out, &panels.toys, render_toys);
    out
}

fn render_view<R: 'static>(out: &mut String, view: &PanelView<R>, body: fn(&mut String, &R)) {
    let _ = writeln!(out, "{}", separator(RULE_WIDTH));
    match view {
        PanelView::Placeholder { title, prompt } => {
            let _ = writeln!(out, "{}", style(title).bold());
            let _ = writeln!(out, "  {}", style(prompt).dim());
        }
        PanelView::Populated {
            heading,
            subtitle,
            record,
        } => {
            let _ = writeln!(out, "{}", style(heading).bold());
            let _ = writeln!(out, "{}", style(subtitle).dim());
            let _ = writeln!(out);
            body(out, record);
        }
    }
    let _ = writeln!(out);
}

fn bullets(out: &mut String, items: &[&str]) {
    for item in items {
        let _ = writeln!(out, "  • {}", item);
    }
}

fn render_feeding(out: &mut String, record: &FeedingRecord) {
    let _ = writeln!(out, "Daily amount: {}", record.daily_amount);
    let _ = writeln!(out, "Frequency:    {}", record.frequency);
    let _ = writeln!(out, "{}", style("Recommended foods").green());
    bullets(out, record.recommended_foods);
    let _ = writeln!(out, "{}", style("Foods to avoid").red());
    bullets(out, record.avoid_foods);
    let _ = writeln!(out, "Tip: {}", record.tip);
}

fn render_temperature(out: &mut String, record: &TemperatureRecord) {
    let _ = writeln!(out, "Ideal range:    {}", record.ideal_range);
    let _ = writeln!(out, "Cold threshold: {}", style(record.cold_threshold).cyan());
    let _ = writeln!(out, "Hot threshold:  {}", style(record.hot_threshold).red());
    let _ = writeln!(out, "Tips");
    bullets(out, record.tips);
}

fn render_play(out: &mut String, record: &PlayActivityRecord) {
    for activity in record.activities {
        let label = activity.difficulty.label();
        let _ = writeln!(
            out,
            "{} {}  ({})",
            style(activity.name).bold(),
            badge(label, BadgeStyle::for_difficulty(label)),
            activity.duration
        );
        let _ = writeln!(out, "  {}", activity.description);
        let _ = writeln!(out, "  Benefits: {}", activity.benefits);
    }
}

fn render_toys(out: &mut String, record: &ToyRecord) {
    let top = record.top_rated();
    for toy in record.toys {
        let pick = if top.is_some_and(|t| std::ptr::eq(t, toy)) {
            format!("  {}", style("Top pick").yellow().bold())
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "{} {}  {}  ★ {}{}",
            style(toy.name).bold(),
            badge(toy.category, BadgeStyle::for_category(toy.category)),
            toy.price_range,
            toy.rating,
            pick
        );
        let _ = writeln!(out, "  {}", toy.description);
        let _ = writeln!(out, "  Benefits: {}", toy.benefits.join(", "));
    }
    let _ = writeln!(out, "{}", style("Shopping tips").bold());
    bullets(out, record.shopping_tips);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pet_care_core::models::PetType;
    use pet_care_core::selector::CareGuide;

    fn plain(panels: &CarePanels) -> String {
        console::strip_ansi_codes(&render_panels(panels)).into_owned()
    }

    #[test]
    fn test_placeholders() {
        let text = plain(&CareGuide::new().panels());
        assert!(text.contains("Food Recommendations"));
        assert!(text.contains("Select a pet to see feeding guidelines"));
        assert!(text.contains("Select a pet to see recommended toys and enrichment"));
        assert!(!text.contains("Daily amount"));
    }

    #[test]
    fn test_populated_dog() {
        let mut guide = CareGuide::new();
        guide.select(PetType::Dog);
        let text = plain(&guide.panels());
        assert!(text.contains("Dog Feeding Guide"));
        assert!(text.contains("Nutritional recommendations for your dog"));
        assert!(text.contains("  • Chocolate"));
        assert!(text.contains("Dog Toy Recommendations"));
        assert!(text.contains("Shopping tips"));
    }

    #[test]
    fn test_ratings_render_as_authored() {
        let mut guide = CareGuide::new();
        guide.select(PetType::Bird);
        let text = plain(&guide.panels());
        assert!(text.contains("$6-10  ★ 4\n"));
        assert!(!text.contains("★ 4.0"));
        assert!(text.contains("★ 4.7  Top pick"));
    }

    #[test]
    fn test_only_top_rated_toy_is_marked() {
        let mut guide = CareGuide::new();
        guide.select(PetType::Cat);
        let text = plain(&guide.panels());
        assert_eq!(text.matches("Top pick").count(), 1);
        let marked = text.lines().find(|l| l.contains("Top pick")).unwrap();
        assert!(marked.starts_with("Feather Wand"));
    }
}
