//! Command line parsing for the interactive loop

use menu_catalog::NodeId;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// `s|start <id>`
    Start(NodeId),
    /// `a|add <id>...`
    Add(Vec<NodeId>),
    /// `r|remove <id>...`
    Remove(Vec<NodeId>),
    /// `po|printorder`
    PrintOrder,
    /// `poo|printorderoptions`
    PrintOrderOptions,
    /// `pc|printcart`
    PrintCart,
    /// `prc|pricecart`
    PriceCart,
    /// `pro|priceorder`
    PriceOrder,
    /// `sao|switchactiveorder <n>`
    SwitchActive(usize),
    /// `ro|removeorder`
    RemoveOrder,
    /// `sm|search <query>`
    Search(String),
    /// `al|allergens <name>`
    Allergens(String),
    /// `aal|allallergens`
    AllAllergens,
    /// `sal|searchallergens <query>`
    SearchAllergens(String),
    /// `sin|searchingredients <query>`
    SearchIngredients(String),
    /// `oal|orderallergens`
    OrderAllergens,
    /// `help`
    Help,
    /// `q|quit`
    Quit,
    /// Blank line
    Empty,
    /// Anything that could not be parsed, with the message to show
    Invalid(String),
}

/// Help text listing every command
pub(crate) const HELP: &str = "\
Commands:
  s <id>        - start order from root ID
  a <id>...     - add items to order
  r <id>...     - remove items from order
  po            - print current order (just selected)
  poo           - print order options from current order
  pc            - print cart
  prc           - print cart total price
  pro           - print current order price
  sao <n>       - switch to active order number n
  ro            - remove current order
  sm <query>    - search menu titles
  al <name>     - allergens of a product or sub-item
  aal           - allergens of every product
  sal <query>   - search allergens by name
  sin <query>   - search ingredients by sub-item name
  oal           - allergens of the current order's product
  help          - show this help
  q             - quit";

impl Command {
    /// Parse a line; command names are case-insensitive
    #[must_use]
    pub(crate) fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Self::Empty;
        };
        let args: Vec<&str> = parts.collect();

        match head.to_lowercase().as_str() {
            "q" | "quit" => Self::Quit,
            "help" => Self::Help,
            "s" | "start" => match args.first() {
                None => usage("s <rootId>"),
                Some(raw) => parse_id(raw).map_or_else(Self::Invalid, Self::Start),
            },
            "a" | "add" => parse_ids(&args, "a <itemId>...").map_or_else(Self::Invalid, Self::Add),
            "r" | "remove" => {
                parse_ids(&args, "r <itemId>...").map_or_else(Self::Invalid, Self::Remove)
            }
            "po" | "printorder" => Self::PrintOrder,
            "poo" | "printorderoptions" => Self::PrintOrderOptions,
            "pc" | "printcart" => Self::PrintCart,
            "prc" | "pricecart" => Self::PriceCart,
            "pro" | "priceorder" => Self::PriceOrder,
            "sao" | "switchactiveorder" => match args.first() {
                None => usage("sao <orderNumber>"),
                Some(raw) => raw.parse().map_or_else(
                    |_| Self::Invalid(format!("Invalid order number: {raw}")),
                    Self::SwitchActive,
                ),
            },
            "ro" | "removeorder" => Self::RemoveOrder,
            "sm" | "search" => text_arg(&args, "sm <query>", Self::Search),
            "al" | "allergens" => text_arg(&args, "al <name>", Self::Allergens),
            "aal" | "allallergens" => Self::AllAllergens,
            "sal" | "searchallergens" => text_arg(&args, "sal <query>", Self::SearchAllergens),
            "sin" | "searchingredients" => {
                text_arg(&args, "sin <query>", Self::SearchIngredients)
            }
            "oal" | "orderallergens" => Self::OrderAllergens,
            _ => Self::Invalid("Unknown command. Type 'help' for list.".to_string()),
        }
    }
}

fn usage(form: &str) -> Command {
    Command::Invalid(format!("Usage: {form}"))
}

/// Remaining words joined by single spaces
fn text_arg(args: &[&str], form: &str, make: fn(String) -> Command) -> Command {
    if args.is_empty() {
        usage(form)
    } else {
        make(args.join(" "))
    }
}

fn parse_id(raw: &str) -> Result<NodeId, String> {
    raw.parse::<i64>()
        .map(NodeId)
        .map_err(|_| format!("Invalid id: {raw}"))
}

fn parse_ids(args: &[&str], form: &str) -> Result<Vec<NodeId>, String> {
    if args.is_empty() {
        return Err(format!("Usage: {form}"));
    }
    args.iter().map(|raw| parse_id(raw)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("QUIT"), Command::Quit);
        assert_eq!(Command::parse("poo"), Command::PrintOrderOptions);
        assert_eq!(Command::parse("printcart"), Command::PrintCart);
        assert_eq!(Command::parse("   "), Command::Empty);
    }

    #[test]
    fn test_ids() {
        assert_eq!(Command::parse("s 100"), Command::Start(NodeId(100)));
        assert_eq!(
            Command::parse("a 1 2  3"),
            Command::Add(vec![NodeId(1), NodeId(2), NodeId(3)])
        );
        assert_eq!(Command::parse("r -4"), Command::Remove(vec![NodeId(-4)]));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(Command::parse("s"), Command::Invalid("Usage: s <rootId>".into()));
        assert_eq!(Command::parse("a 1 x"), Command::Invalid("Invalid id: x".into()));
        assert_eq!(
            Command::parse("sao two"),
            Command::Invalid("Invalid order number: two".into())
        );
        assert!(matches!(Command::parse("dance"), Command::Invalid(_)));
    }

    #[test]
    fn test_search_keeps_query_words() {
        assert_eq!(
            Command::parse("sm big   mac meal"),
            Command::Search("big mac meal".into())
        );
    }

    #[test]
    fn test_allergen_commands() {
        assert_eq!(
            Command::parse("al Sesame  bun"),
            Command::Allergens("Sesame bun".into())
        );
        assert_eq!(Command::parse("AAL"), Command::AllAllergens);
        assert_eq!(Command::parse("sal burger"), Command::SearchAllergens("burger".into()));
        assert_eq!(
            Command::parse("searchingredients cheddar"),
            Command::SearchIngredients("cheddar".into())
        );
        assert_eq!(Command::parse("oal"), Command::OrderAllergens);
        assert_eq!(Command::parse("al"), Command::Invalid("Usage: al <name>".into()));
    }
}
