use colored::Colorize;
use serde::Serialize;

use crate::{
    app::Config,
    calculator::{parse_key_string, CalcView, Calculator},
    cli::OutputFormat,
    gallery::{Filter, Gallery, GalleryItem},
};

/// Result of feeding a key string to the calculator
#[derive(Debug, Serialize)]
pub struct CalcRunResult {
    /// The keys that were pressed
    pub keys: String,
    /// Display regions after the last key
    pub view: CalcView,
    /// Last successfully computed value
    pub last_result: Option<f64>,
}

/// Items visible under a filter
#[derive(Debug, Serialize)]
pub struct GalleryListing {
    pub filter: String,
    pub total: usize,
    pub items: Vec<ListedItem>,
}

#[derive(Debug, Serialize)]
pub struct ListedItem {
    /// Position in the full manifest
    pub id: usize,
    pub category: String,
    pub src: String,
    pub caption: String,
}

/// Non-interactive runner for scripted calculator and gallery use
pub struct NonInteractiveRunner {
    config: Config,
}

impl NonInteractiveRunner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Press each key in turn; a visible error is reported as-is rather than
    /// waiting for it to clear
    pub fn run_calculator(&self, keys: &str) -> CalcRunResult {
        let mut calculator = Calculator::new(self.config.calculator.settings());
        for command in parse_key_string(keys) {
            calculator.apply(command);
        }

        CalcRunResult {
            keys: keys.to_string(),
            view: calculator.view(),
            last_result: calculator.last_result(),
        }
    }

    /// Apply `filter` to the items and list what stays visible
    pub fn list_gallery(&self, items: Vec<GalleryItem>, filter: &str) -> GalleryListing {
        let mut gallery = Gallery::with_crossfade(items, self.config.gallery.crossfade());
        gallery.apply_filter(Filter::from_tag(filter));

        let items = gallery
            .visible_items()
            .iter()
            .filter_map(|&id| gallery.item(id).map(|item| (id, item)))
            .map(|(id, item)| ListedItem {
                id: id.0,
                category: item.category.clone(),
                src: item.source.clone(),
                caption: item.caption.clone(),
            })
            .collect();

        GalleryListing {
            filter: gallery.active_filter().to_string(),
            total: gallery.items().len(),
            items,
        }
    }

    /// Format a calculator run for output
    pub fn format_calc_result(&self, result: &CalcRunResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(result).unwrap_or_else(|e| {
                format!("{{\"error\": \"Failed to serialize result: {}\"}}", e)
            }),
            OutputFormat::Text => {
                let mut output = String::new();
                if !result.view.previous_operation.is_empty() {
                    output.push_str(&format!("{}\n", result.view.previous_operation.dimmed()));
                }
                if result.view.is_error {
                    output.push_str(&result.view.display.red().to_string());
                } else {
                    output.push_str(&result.view.display);
                }
                output
            }
        }
    }

    /// Format a gallery listing for output
    pub fn format_listing(&self, listing: &GalleryListing, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(listing).unwrap_or_else(|e| {
                format!("{{\"error\": \"Failed to serialize listing: {}\"}}", e)
            }),
            OutputFormat::Text => {
                let mut output = format!(
                    "Filter: {} ({} of {} items)\n",
                    listing.filter.cyan(),
                    listing.items.len(),
                    listing.total
                );
                for item in &listing.items {
                    output.push_str(&format!(
                        "  [{}] {} - {} ({})\n",
                        item.category.yellow(),
                        item.caption,
                        item.src,
                        item.id
                    ));
                }
                output
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::sample_items;

    fn runner() -> NonInteractiveRunner {
        NonInteractiveRunner::new(Config::default())
    }

    #[test]
    fn test_run_calculator() {
        let result = runner().run_calculator("5+3=");
        assert_eq!(result.view.display, "8");
        assert_eq!(result.view.previous_operation, "");
        assert_eq!(result.last_result, Some(8.0));
    }

    #[test]
    fn test_run_calculator_reports_error() {
        let result = runner().run_calculator("7/0=");
        assert!(result.view.is_error);
        assert_eq!(result.view.display, "Cannot divide by zero");
        assert_eq!(result.last_result, None);
    }

    #[test]
    fn test_calc_json_output() {
        let runner = runner();
        let result = runner.run_calculator("1/4=");
        let json = runner.format_calc_result(&result, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["view"]["display"], "0.25");
        assert_eq!(value["view"]["is_error"], false);
        assert_eq!(value["last_result"], 0.25);
    }

    #[test]
    fn test_calc_text_output() {
        let runner = runner();
        let result = runner.run_calculator("12*");
        let text = runner.format_calc_result(&result, OutputFormat::Text);
        assert!(text.contains("12 ×"));
        assert!(text.ends_with("12"));
    }

    #[test]
    fn test_list_gallery() {
        let listing = runner().list_gallery(sample_items(), "city");
        assert_eq!(listing.filter, "city");
        assert_eq!(listing.total, sample_items().len());
        assert!(!listing.items.is_empty());
        assert!(listing.items.iter().all(|item| item.category == "city"));
        assert!(listing.items.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_list_gallery_unknown_filter() {
        let runner = runner();
        let listing = runner.list_gallery(sample_items(), "space");
        assert!(listing.items.is_empty());

        let text = runner.format_listing(&listing, OutputFormat::Text);
        assert!(text.contains("0 of 9 items"));
    }

    #[test]
    fn test_listing_json_output() {
        let runner = runner();
        let listing = runner.list_gallery(sample_items(), "all");
        let json = runner.format_listing(&listing, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["items"].as_array().map(Vec::len), Some(9));
        assert_eq!(value["items"][0]["src"], "images/forest.jpg");
    }
}
