//! Output formatting for the CLI.

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use swipe_commerce::cart::CartSummary;
use swipe_commerce::catalog::Item;
use swipe_deck::SwipeOutcome;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Render the card on top of the stack.
    pub fn card(&self, item: &Item, next: Option<&Item>, counter: Option<(usize, usize)>) {
        if self.json {
            return;
        }
        let width = self.term_width().clamp(30, 60);
        let rule = "─".repeat(width);

        println!("{}", style(&rule).dim());
        println!(
            "{}  {}",
            style(&item.name).bold(),
            style(item.price.display()).red().bold()
        );
        if !item.description.is_empty() {
            println!("{}", style(&item.description).dim());
        }
        if !item.weight.is_empty() {
            println!("{} {}", style("⚖").dim(), item.weight);
        }
        println!("{}", style(&rule).dim());

        if let Some((n, total)) = counter {
            print!("{}", style(format!("{} / {}", n, total)).dim());
        }
        if let Some(next) = next {
            print!("{}", style(format!("   up next: {}", next.name)).dim());
        }
        println!();
    }

    /// Print a one-line outcome of a swipe.
    pub fn outcome(&self, item: &Item, outcome: SwipeOutcome) {
        if self.json {
            return;
        }
        match outcome {
            SwipeOutcome::CommitDown => {
                println!("{} {} added to cart", style("↓").red().bold(), item.name)
            }
            SwipeOutcome::DiscardRight => println!("{} {}", style("→").dim(), item.name),
            SwipeOutcome::DiscardLeft => println!("{} {}", style("←").dim(), item.name),
            SwipeOutcome::SnapBack => println!("{} {}", style("↺").yellow(), item.name),
        }
    }

    /// Render the cart summary.
    pub fn cart(&self, summary: &CartSummary) {
        if self.json {
            self.json(summary);
            return;
        }
        if summary.lines.is_empty() {
            self.info("Cart is empty. Swipe down on an item to add it.");
            return;
        }

        let widths = [24, 10, 5, 12];
        self.table_row(&["ITEM", "PRICE", "QTY", "TOTAL"], &widths);
        for line in &summary.lines {
            self.table_row(
                &[
                    line.name.as_str(),
                    line.unit_price.display().as_str(),
                    line.quantity.to_string().as_str(),
                    line.line_total.display().as_str(),
                ],
                &widths,
            );
        }
        println!();
        self.kv("items", &summary.total_items.to_string());
        self.kv("total", &style(summary.total_price.display()).bold().to_string());
    }

    /// Create a progress bar for reviewed cards.
    pub fn progress(&self, len: u64, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:30.red/white}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        pb.set_message(msg.to_string());
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Get terminal width.
    pub fn term_width(&self) -> usize {
        self.term.size().1 as usize
    }
}
