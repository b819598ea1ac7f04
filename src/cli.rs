use clap::{Args, Parser, Subcommand};
use otb_helper_common::{FilterControls, RangeEnd, RangeField, SelectField, ViewMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "otb-helper")]
#[command(about = "Search OTB Discs products, filter them, and build a cart", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL (overrides OTB_HELPER_URL and the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for a disc and show the (filtered) results
    Search {
        /// Disc name, e.g. "Destroyer"
        #[arg(required = true)]
        name: String,

        /// Product pages the backend should fetch
        #[arg(short, long)]
        max_results: Option<u32>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Results layout (cards/table); defaults to the configured view
        #[arg(long, value_parser = parse_view)]
        view: Option<ViewMode>,

        /// Write the filtered results as CSV
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Pick results to add to the cart
        #[arg(short, long)]
        pick: bool,
    },

    /// Check that the backend is reachable
    Health,

    /// Show or edit the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },

    /// Print the checkout plan for the cart
    Checkout,

    /// Show or edit settings
    Config {
        /// Set the backend base URL
        #[arg(long)]
        set_base_url: Option<String>,

        /// Set the default results layout (cards/table)
        #[arg(long)]
        set_view: Option<String>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum CartAction {
    /// List cart items (default)
    List,
    /// Remove one item by its key
    Remove {
        #[arg(required = true)]
        key: String,
    },
    /// Empty the cart
    Clear,
}

/// Client-side filters, applied to the search results
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Mold (repeatable)
    #[arg(long = "mold")]
    pub molds: Vec<String>,

    /// Plastic type (repeatable)
    #[arg(long = "plastic")]
    pub plastics: Vec<String>,

    /// Plastic color (repeatable)
    #[arg(long = "color")]
    pub colors: Vec<String>,

    /// Rim color (repeatable)
    #[arg(long = "rim")]
    pub rims: Vec<String>,

    /// Stamp foil (repeatable)
    #[arg(long = "foil")]
    pub foils: Vec<String>,

    #[arg(long)]
    pub weight_min: Option<String>,
    #[arg(long)]
    pub weight_max: Option<String>,

    #[arg(long)]
    pub scaled_weight_min: Option<String>,
    #[arg(long)]
    pub scaled_weight_max: Option<String>,

    /// 1-10
    #[arg(long)]
    pub flatness_min: Option<String>,
    #[arg(long)]
    pub flatness_max: Option<String>,

    /// 1-10
    #[arg(long)]
    pub stiffness_min: Option<String>,
    #[arg(long)]
    pub stiffness_max: Option<String>,

    #[arg(long)]
    pub price_min: Option<String>,
    #[arg(long)]
    pub price_max: Option<String>,
}

impl FilterArgs {
    /// Same raw snapshot the web form produces
    pub fn to_controls(&self) -> FilterControls {
        let mut controls = FilterControls::new();

        let selects = [
            (SelectField::Mold, &self.molds),
            (SelectField::PlasticType, &self.plastics),
            (SelectField::PlasticColor, &self.colors),
            (SelectField::RimColor, &self.rims),
            (SelectField::StampFoil, &self.foils),
        ];
        for (field, values) in selects {
            for value in values {
                controls.set_checked(field, value, true);
            }
        }

        let ranges = [
            (RangeField::Weight, &self.weight_min, &self.weight_max),
            (RangeField::ScaledWeight, &self.scaled_weight_min, &self.scaled_weight_max),
            (RangeField::Flatness, &self.flatness_min, &self.flatness_max),
            (RangeField::Stiffness, &self.stiffness_min, &self.stiffness_max),
            (RangeField::Price, &self.price_min, &self.price_max),
        ];
        for (field, min, max) in ranges {
            if let Some(raw) = min {
                controls.set_input(field, RangeEnd::Min, raw.as_str());
            }
            if let Some(raw) = max {
                controls.set_input(field, RangeEnd::Max, raw.as_str());
            }
        }

        controls
    }
}

fn parse_view(s: &str) -> Result<ViewMode, String> {
    ViewMode::parse(s).ok_or_else(|| format!("Unknown view: {}. Use cards or table", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use otb_helper_common::FilterState;

    #[test]
    fn test_search_args() {
        let cli = Cli::parse_from([
            "otb-helper", "search", "Destroyer", "--mold", "Destroyer", "--mold", "Wraith",
            "--weight-min", "172", "--view", "table",
        ]);
        let Commands::Search { name, filters, view, .. } = cli.command else {
            panic!("expected search");
        };
        assert_eq!(name, "Destroyer");
        assert_eq!(view, Some(ViewMode::Table));

        let state = FilterState::from_controls(&filters.to_controls());
        assert_eq!(state.selection(SelectField::Mold).map(|s| s.len()), Some(2));
        assert_eq!(state.bounds(RangeField::Weight).min, Some(172.0));
    }

    #[test]
    fn test_crossed_bounds_swap() {
        let args = FilterArgs {
            price_min: Some("30".into()),
            price_max: Some("15".into()),
            ..Default::default()
        };
        let state = FilterState::from_controls(&args.to_controls());
        let price = state.bounds(RangeField::Price);
        assert_eq!((price.min, price.max), (Some(15.0), Some(30.0)));
    }

    #[test]
    fn test_cart_default_action() {
        let cli = Cli::parse_from(["otb-helper", "cart"]);
        assert!(matches!(cli.command, Commands::Cart { action: None }));
    }

    #[test]
    fn test_bad_view_rejected() {
        assert!(Cli::try_parse_from(["otb-helper", "search", "x", "--view", "grid"]).is_err());
    }
}
