//! Text rendering of inventory state and operation results.

use std::io::{self, Write};

use stockroom_core::Queue;
use stockroom_inventory::{Inventory, OrderLine, StockItem};
use stockroom_parties::Person;

const RULE: &str = "-------------------------------------------------";

pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "                             =========")?;
    writeln!(out, "                             Help Menu")?;
    writeln!(out, "                             =========")?;
    writeln!(out, "---------------------------------------------------------------------")?;
    for (usage, name, description) in [
        ("H        ", "(help)    ", "Help menu"),
        ("I <title>", "(inquire) ", "Display the inventory info for a title"),
        ("L        ", "(list)    ", "List the entire inventory"),
        ("A <title>", "(add)     ", "Add a new title to the inventory"),
        ("M <title>", "(modify)  ", "Modify the want value for a title"),
        ("D <title>", "(deliver) ", "Deliver to people on the waiting list"),
        ("O        ", "(order)   ", "Run the purchase order"),
        ("R        ", "(return)  ", "Run the return order"),
        ("S <title>", "(sell)    ", "Sell a title"),
        ("C        ", "(customer)", "Display the customer list"),
        ("X <title>", "(delete)  ", "Delete a title"),
        ("Y        ", "(remove)  ", "Delete a customer"),
        ("Z        ", "(clear)   ", "Delete every title and customer"),
        ("Q        ", "(quit)    ", "Save the inventory and quit"),
    ] {
        writeln!(out, "{usage} {name} {description}")?;
    }
    writeln!(out, "---------------------------------------------------------------------")
}

/// `N person(s) on waiting list: a, b.` or `... list is empty`.
pub fn waiting_list(out: &mut impl Write, queue: &Queue<Person>) -> io::Result<()> {
    write!(out, "{} person(s) on waiting list: ", queue.size())?;
    if queue.is_empty() {
        return writeln!(out, "list is empty");
    }
    writeln!(out, "{}.", join(queue.iter()))
}

pub fn stock_item(out: &mut impl Write, item: &StockItem) -> io::Result<()> {
    writeln!(out, "Title: {}", item.title())?;
    writeln!(out, "[1] {} currently in stock", item.have())?;
    writeln!(out, "[2] {} should be in stock", item.want())?;
    write!(out, "[3] ")?;
    waiting_list(out, item.waiting_list())?;
    writeln!(out, "{RULE}")
}

pub fn catalog(out: &mut impl Write, inventory: &Inventory) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Inventory in alphabetical order by title")?;
    writeln!(out, "========================================")?;
    if inventory.catalog().is_empty() {
        return writeln!(out, "list is empty");
    }
    for item in inventory.catalog() {
        stock_item(out, item)?;
    }
    Ok(())
}

pub fn customers(out: &mut impl Write, inventory: &Inventory) -> io::Result<()> {
    let customers = inventory.customers();
    write!(out, "{} person(s) on the customer list: ", customers.size())?;
    if customers.is_empty() {
        return writeln!(out, "list is empty");
    }
    writeln!(out, "{}.", join(customers.iter()))
}

/// Purchase or return order report; `verb` is `ordered` or `returned`.
pub fn order(
    out: &mut impl Write,
    heading: &str,
    verb: &str,
    lines: &[OrderLine],
) -> io::Result<()> {
    writeln!(out)?;
    if lines.is_empty() {
        return writeln!(out, "No videos have been {verb}.");
    }
    writeln!(out, "{heading}")?;
    writeln!(out, "{}", "=".repeat(heading.len()))?;
    for line in lines {
        writeln!(
            out,
            "[{}] {} unit(s) of \"{}\" {verb}.",
            line.line, line.quantity, line.title
        )?;
    }
    Ok(())
}

fn join<'a>(people: impl Iterator<Item = &'a Person>) -> String {
    people.map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
