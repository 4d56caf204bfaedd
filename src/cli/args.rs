use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cart-cli")]
#[command(about = "A shopping cart playground for unit-testing practice")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive shopping session
    Shop {
        /// Print the cart as JSON when the session ends
        #[arg(long)]
        json: bool,
    },
    /// Price a one-off basket without a session
    Price {
        /// Basket item as NAME=PRICE (repeatable)
        #[arg(short, long = "item")]
        items: Vec<String>,
        /// Coupon as NAME=PERCENT, applied to every item
        #[arg(short, long)]
        coupon: Option<String>,
        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Walk through the classic book-and-movie scenarios
    Demo,
}
