//! Command execution against a session

use crate::command::{Command, HELP};
use menu_engine::{Mutation, Session, SessionError, NO_ALLERGEN_DATA};

/// Result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reply {
    /// Text to print, loop continues
    Output(String),
    /// Nothing to print
    Silent,
    /// Leave the loop
    Quit,
}

/// Run one command, turning session errors into printable text
pub(crate) fn execute(session: &mut Session, command: Command) -> Reply {
    match run(session, command) {
        Ok(reply) => reply,
        Err(err) => Reply::Output(format!("Error: {err}")),
    }
}

fn run(session: &mut Session, command: Command) -> Result<Reply, SessionError> {
    let text = match command {
        Command::Empty => return Ok(Reply::Silent),
        Command::Quit => return Ok(Reply::Quit),
        Command::Help => HELP.to_string(),
        Command::Invalid(message) => message,
        Command::Start(root) => {
            session.start_order(root)?;
            format!("Started new order from ID {root}")
        }
        Command::Add(ids) => {
            let outcomes = session.add_multiple(&ids)?;
            report("Added", &ids, &outcomes)
        }
        Command::Remove(ids) => {
            let outcomes = session.remove_multiple(&ids)?;
            report("Removed", &ids, &outcomes)
        }
        Command::PrintOrder => session.print_order(),
        Command::PrintOrderOptions => session.print_order_options(),
        Command::PrintCart => session.print_cart(),
        Command::PriceCart => format!("Cart Total Price: {}", session.cart_total_price()),
        Command::PriceOrder => format!("Order Price: {}", session.order_price()?),
        Command::SwitchActive(position) => {
            session.switch_active(position)?;
            format!("Switched to active order {position}")
        }
        Command::RemoveOrder => {
            session.remove_active_order()?;
            "Removed current order".to_string()
        }
        Command::Search(query) => {
            let found = session.menu().search_top(&query);
            if found.is_empty() {
                format!("No match for \"{query}\"")
            } else {
                found
            }
        }
        Command::Allergens(name) => session.menu().print_allergens(&name),
        Command::AllAllergens => session.menu().print_all_allergens(),
        Command::SearchAllergens(query) => {
            allergen_reply(session, session.menu().search_allergens(&query), &query)
        }
        Command::SearchIngredients(query) => {
            allergen_reply(session, session.menu().search_ingredients(&query), &query)
        }
        Command::OrderAllergens => {
            let found = session.order_allergens()?;
            let title = session
                .active_order()
                .and_then(|order| session.menu().order_title(order))
                .unwrap_or_default();
            allergen_reply(session, found, title)
        }
    };
    Ok(Reply::Output(text))
}

fn allergen_reply(session: &Session, found: Option<String>, query: &str) -> String {
    match found {
        Some(text) => text,
        None if session.menu().allergen_table().is_none() => NO_ALLERGEN_DATA.to_string(),
        None => format!("No allergen entry matches \"{query}\""),
    }
}

fn report(verb: &str, ids: &[menu_catalog::NodeId], outcomes: &[Mutation]) -> String {
    ids.iter()
        .zip(outcomes)
        .map(|(id, outcome)| match outcome {
            Mutation::Applied => format!("{verb} item {id}"),
            Mutation::Unchanged(reason) => format!("Item {id} unchanged: {reason}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
