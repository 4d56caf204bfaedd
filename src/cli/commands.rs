use anyhow::Result;
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Input};
use thiserror::Error;
use tracing::info;

use crate::{
    cli::args::*,
    models::{coupon::Coupon, product::Product},
    services::CartService,
    utils::{
        config::Config,
        formatting::{format_cart_table, format_price, format_receipt},
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static CART: Emoji<'_, '_> = Emoji("🛒 ", "");
static TAG: Emoji<'_, '_> = Emoji("🏷️  ", "");

// custom error for session/argument parsing
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the command list")]
    UnknownCommand(String),

    #[error("Missing {0}")]
    MissingArgument(&'static str),

    #[error("Invalid price '{0}': expected a number")]
    InvalidPrice(String),

    #[error("Invalid discount '{0}': expected a number")]
    InvalidDiscount(String),

    #[error("Invalid {kind} spec '{value}': expected NAME=VALUE")]
    InvalidSpec { kind: &'static str, value: String },
}

/// One line of input in the interactive session.
#[derive(Debug)]
pub enum SessionCommand {
    Add {
        product: Product,
        coupon: Option<Coupon>,
    },
    Remove {
        product: Product,
    },
    List,
    Total,
    Json,
    Clear,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. A blank line parses to `None` so the prompt
    /// loop can just re-prompt.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };

        let command = match keyword {
            "add" => {
                let name = tokens
                    .next()
                    .ok_or(CommandError::MissingArgument("product name"))?;
                let price = parse_price(
                    tokens
                        .next()
                        .ok_or(CommandError::MissingArgument("product price"))?,
                )?;
                let coupon = tokens.next().map(parse_coupon_spec).transpose()?;
                SessionCommand::Add {
                    product: Product::new(name, price),
                    coupon,
                }
            }
            "remove" | "rm" => {
                let name = tokens
                    .next()
                    .ok_or(CommandError::MissingArgument("product name"))?;
                let price = parse_price(
                    tokens
                        .next()
                        .ok_or(CommandError::MissingArgument("product price"))?,
                )?;
                SessionCommand::Remove {
                    product: Product::new(name, price),
                }
            }
            "list" | "ls" => SessionCommand::List,
            "total" => SessionCommand::Total,
            "json" => SessionCommand::Json,
            "clear" => SessionCommand::Clear,
            "help" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_price(value: &str) -> Result<f64, CommandError> {
    value
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidPrice(value.to_string()))
}

/// Parse a `NAME=PERCENT` coupon spec.
fn parse_coupon_spec(spec: &str) -> Result<Coupon, CommandError> {
    let (name, discount) = spec
        .split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| CommandError::InvalidSpec {
            kind: "coupon",
            value: spec.to_string(),
        })?;
    let discount = discount
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidDiscount(discount.to_string()))?;
    Ok(Coupon::new(name, discount))
}

/// Parse a `NAME=PRICE` basket item spec.
fn parse_item_spec(spec: &str) -> Result<Product, CommandError> {
    let (name, price) = spec
        .split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| CommandError::InvalidSpec {
            kind: "item",
            value: spec.to_string(),
        })?;
    let price = parse_price(price)?;
    Ok(Product::new(name, price))
}

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self, args: Args) -> Result<()> {
        match args.command {
            Commands::Shop { json } => self.handle_shop(json),
            Commands::Price {
                items,
                coupon,
                json,
            } => self.handle_price(items, coupon, json),
            Commands::Demo => self.handle_demo(),
        }
    }

    fn handle_shop(&self, json_on_exit: bool) -> Result<()> {
        println!(
            "{}{}",
            CART,
            style("Interactive shopping session").bold().cyan()
        );
        println!("Type 'help' for the command list, 'quit' to leave.");

        let mut service = CartService::new();
        let theme = ColorfulTheme::default();

        loop {
            let line: String = Input::with_theme(&theme)
                .with_prompt("cart")
                .allow_empty(true)
                .interact_text()?;

            let command = match SessionCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    println!("{}{}", CROSS, style(e).red());
                    continue;
                }
            };

            match command {
                SessionCommand::Add { mut product, coupon } => {
                    if let Some(coupon) = coupon {
                        let before = product.price;
                        service.apply_coupon(&mut product, &coupon);
                        println!(
                            "{}{}: {} -> {}",
                            TAG,
                            style(&coupon.name).magenta(),
                            format_price(before, &self.config.currency),
                            format_price(product.price, &self.config.currency)
                        );
                    }
                    println!(
                        "{}Added {} at {}",
                        CHECKMARK,
                        style(&product.name).green(),
                        format_price(product.price, &self.config.currency)
                    );
                    service.add(product);
                }
                SessionCommand::Remove { product } => {
                    if service.remove(&product) {
                        println!("{}Removed {}", CHECKMARK, style(&product.name).green());
                    } else {
                        println!("{}No matching product in the cart", WARNING);
                    }
                }
                SessionCommand::List => self.print_cart(&service),
                SessionCommand::Total => {
                    println!(
                        "Total: {}",
                        style(format_price(service.total(), &self.config.currency))
                            .bold()
                            .green()
                    );
                }
                SessionCommand::Json => {
                    println!("{}", serde_json::to_string_pretty(&service.summary())?)
                }
                SessionCommand::Clear => {
                    let dropped = service.clear();
                    println!("{}Cleared {} item(s)", CHECKMARK, dropped);
                }
                SessionCommand::Help => self.print_help(),
                SessionCommand::Quit => break,
            }
        }

        if json_on_exit {
            println!("{}", serde_json::to_string_pretty(&service.summary())?);
        } else {
            self.print_cart(&service);
            print!("{}", format_receipt(&service.summary(), &self.config.currency));
        }

        info!("Shopping session finished");
        Ok(())
    }

    fn handle_price(
        &self,
        items: Vec<String>,
        coupon: Option<String>,
        json: bool,
    ) -> Result<()> {
        let coupon = coupon.as_deref().map(parse_coupon_spec).transpose()?;

        let mut service = CartService::new();
        for spec in &items {
            let mut product = parse_item_spec(spec)?;
            if let Some(coupon) = &coupon {
                service.apply_coupon(&mut product, coupon);
            }
            service.add(product);
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&service.summary())?);
        } else {
            self.print_cart(&service);
            println!(
                "Total: {}",
                style(format_price(service.total(), &self.config.currency))
                    .bold()
                    .green()
            );
        }

        Ok(())
    }

    /// Scripted walkthrough of the three classic scenarios: coupon
    /// application, totalling a cart, removing a product.
    fn handle_demo(&self) -> Result<()> {
        let currency = &self.config.currency;

        println!("{}{}", TAG, style("Applying a coupon").bold().cyan());
        let mut book = Product::new("Book", 25.0);
        let coupon = Coupon::new("Holiday Sale", 20.0);
        println!("  {} at {}", book.name, format_price(book.price, currency));
        let pricing = CartService::new();
        pricing.apply_coupon(&mut book, &coupon);
        println!(
            "  After '{}' (-{}%): {}",
            coupon.name,
            coupon.discount,
            style(format_price(book.price, currency)).green()
        );

        println!();
        println!("{}{}", CART, style("Filling a cart").bold().cyan());
        let mut service = CartService::new();
        println!(
            "  Empty cart total: {}",
            format_price(service.total(), currency)
        );
        service.add(Product::new("Book", 20.0));
        service.add(Product::new("Movie", 15.0));
        self.print_cart(&service);
        println!(
            "  Total: {}",
            style(format_price(service.total(), currency)).green()
        );

        println!();
        println!("{}{}", CART, style("Removing a product").bold().cyan());
        service.remove(&Product::new("Book", 20.0));
        self.print_cart(&service);
        println!(
            "  Total: {}",
            style(format_price(service.total(), currency)).green()
        );

        println!("{}Demo finished", CHECKMARK);
        Ok(())
    }

    fn print_cart(&self, service: &CartService) {
        if service.is_empty() {
            println!("{}", style("(cart is empty)").dim());
        } else {
            println!("{}", format_cart_table(service.items(), &self.config.currency));
        }
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  add <name> <price> [<coupon>=<discount>]   add a product, optionally discounted");
        println!("  remove <name> <price>                      remove the first matching product");
        println!("  list                                       show the cart contents");
        println!("  total                                      show the running total");
        println!("  json                                       print the cart as JSON");
        println!("  clear                                      empty the cart");
        println!("  quit                                       end the session");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let command = SessionCommand::parse("add Book 25").unwrap().unwrap();

        match command {
            SessionCommand::Add { product, coupon } => {
                assert_eq!(product, Product::new("Book", 25.0));
                assert!(coupon.is_none());
            }
            other => panic!("parsed {:?}", other),
        }
    }

    #[test]
    fn test_parse_add_with_coupon() {
        let command = SessionCommand::parse("add Book 25 Sale=20").unwrap().unwrap();

        match command {
            SessionCommand::Add { product, coupon } => {
                assert_eq!(product, Product::new("Book", 25.0));
                let coupon = coupon.expect("coupon should be parsed");
                assert_eq!(coupon.name, "Sale");
                assert_eq!(coupon.discount, 20.0);
            }
            other => panic!("parsed {:?}", other),
        }
    }

    #[test]
    fn test_parse_remove() {
        let command = SessionCommand::parse("remove Movie 15").unwrap().unwrap();

        match command {
            SessionCommand::Remove { product } => {
                assert_eq!(product, Product::new("Movie", 15.0));
            }
            other => panic!("parsed {:?}", other),
        }
    }

    #[test]
    fn test_parse_bare_commands() {
        assert!(matches!(
            SessionCommand::parse("list").unwrap().unwrap(),
            SessionCommand::List
        ));
        assert!(matches!(
            SessionCommand::parse("total").unwrap().unwrap(),
            SessionCommand::Total
        ));
        assert!(matches!(
            SessionCommand::parse("quit").unwrap().unwrap(),
            SessionCommand::Quit
        ));
        assert!(matches!(
            SessionCommand::parse("q").unwrap().unwrap(),
            SessionCommand::Quit
        ));
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(SessionCommand::parse("").unwrap().is_none());
        assert!(SessionCommand::parse("   ").unwrap().is_none());
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = SessionCommand::parse("checkout").unwrap_err();
        assert_eq!(err, CommandError::UnknownCommand("checkout".to_string()));
    }

    #[test]
    fn test_parse_missing_arguments() {
        assert_eq!(
            SessionCommand::parse("add").unwrap_err(),
            CommandError::MissingArgument("product name")
        );
        assert_eq!(
            SessionCommand::parse("add Book").unwrap_err(),
            CommandError::MissingArgument("product price")
        );
    }

    #[test]
    fn test_parse_invalid_price() {
        let err = SessionCommand::parse("add Book cheap").unwrap_err();
        assert_eq!(err, CommandError::InvalidPrice("cheap".to_string()));
    }

    #[test]
    fn test_parse_item_spec() {
        let product = parse_item_spec("Book=19.99").unwrap();
        assert_eq!(product, Product::new("Book", 19.99));

        assert!(matches!(
            parse_item_spec("Book"),
            Err(CommandError::InvalidSpec { kind: "item", .. })
        ));
        assert!(matches!(
            parse_item_spec("=20"),
            Err(CommandError::InvalidSpec { kind: "item", .. })
        ));
    }

    #[test]
    fn test_parse_coupon_spec() {
        let coupon = parse_coupon_spec("Holiday=20").unwrap();
        assert_eq!(coupon.name, "Holiday");
        assert_eq!(coupon.discount, 20.0);

        assert!(matches!(
            parse_coupon_spec("Holiday"),
            Err(CommandError::InvalidSpec { kind: "coupon", .. })
        ));
        assert_eq!(
            parse_coupon_spec("Holiday=lots").unwrap_err(),
            CommandError::InvalidDiscount("lots".to_string())
        );
    }
}
