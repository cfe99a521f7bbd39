//! Interactive session: restore, command loop, save.

use std::io::{self, BufRead, Write};

use stockroom_core::DomainError;
use stockroom_infra::InventoryStore;
use stockroom_inventory::{DeliveryOutcome, Inventory, Sale, parse_want};
use stockroom_parties::Person;

use crate::command::Command;
use crate::render;

const COMMAND_PROMPT: &str = "\nInput the command (enter \"Q\" or \"q\" to quit): ";

/// One console session over an input reader and an output writer.
///
/// The store is read once in [`Session::start`] and written once when the
/// session ends, either on `Q` or at end of input.
pub struct Session<S, R, W> {
    store: S,
    inventory: Inventory,
    input: R,
    output: W,
}

impl<S, R, W> Session<S, R, W>
where
    S: InventoryStore,
    R: BufRead,
    W: Write,
{
    /// Restore the persisted inventory (or start empty) and print the help menu.
    pub fn start(store: S, input: R, mut output: W) -> io::Result<Self> {
        writeln!(output, "Restoring inventory ...")?;
        let inventory = match store.restore() {
            Some(inventory) => inventory,
            None => {
                writeln!(output, "No saved inventory restored; starting empty.")?;
                Inventory::new()
            }
        };
        render::help(&mut output)?;

        Ok(Self {
            store,
            inventory,
            input,
            output,
        })
    }

    /// Process commands until `Q` or end of input, then save.
    ///
    /// Returns the final inventory. Only output failures are errors; a failed
    /// save is reported on the output and logged.
    pub fn run(mut self) -> io::Result<Inventory> {
        while let Some(line) = self.prompt(COMMAND_PROMPT)? {
            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(err) => {
                    tracing::debug!(error = %err, input = %line, "rejected command");
                    writeln!(self.output, "Invalid input ({err})! Type 'H' for help.")?;
                }
            }
        }
        self.shutdown()?;
        Ok(self.inventory)
    }

    fn shutdown(&mut self) -> io::Result<()> {
        write!(self.output, "\nSaving inventory ... ")?;
        match self.store.save(&self.inventory) {
            Ok(()) => writeln!(self.output, "Done!"),
            Err(err) => {
                tracing::error!(error = %err, "saving inventory failed");
                writeln!(self.output, "failed: {err}")
            }
        }
    }

    /// Print `prompt` and read one line; `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Ask for a first and last name; `None` if input ends before both arrive.
    fn read_person(&mut self) -> io::Result<Option<Person>> {
        let Some(first) = self.prompt("Input first name: ")? else {
            return Ok(None);
        };
        let Some(last) = self.prompt("Input last name: ")? else {
            return Ok(None);
        };
        Ok(Some(Person::new(first.trim(), last.trim())))
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Help => render::help(&mut self.output),
            Command::List => render::catalog(&mut self.output, &self.inventory),
            Command::Customers => render::customers(&mut self.output, &self.inventory),
            Command::Inquire(title) => self.inquire(&title),
            Command::Add(title) => self.add_title(&title),
            Command::Modify(title) => self.modify_want(&title),
            Command::Deliver(title) => self.deliver(&title),
            Command::Order => {
                let lines = self.inventory.purchase_order();
                render::order(&mut self.output, "Purchase Order", "ordered", &lines)
            }
            Command::Return => {
                let lines = self.inventory.return_order();
                render::order(&mut self.output, "Return Order", "returned", &lines)
            }
            Command::Sell(title) => self.sell(&title),
            Command::DeleteTitle(title) => self.delete_title(&title),
            Command::DeleteCustomer => self.delete_customer(),
            Command::DeleteAll => self.delete_all(),
            Command::Quit => Ok(()),
        }
    }

    fn inquire(&mut self, title: &str) -> io::Result<()> {
        match self.inventory.find_stock_item(title) {
            Some(item) => render::stock_item(&mut self.output, item),
            None => writeln!(self.output, "Stock item not found! (title: {title})"),
        }
    }

    fn add_title(&mut self, title: &str) -> io::Result<()> {
        if self.inventory.find_stock_item(title).is_some() {
            return writeln!(
                self.output,
                "-- Title already exists! Use M <title> to modify the want value."
            );
        }

        let answer = self
            .prompt(&format!("Input the initial want value for \"{title}\": "))?
            .unwrap_or_default();
        let want = match parse_want(&answer) {
            Ok(want) => want,
            Err(err) => {
                tracing::debug!(error = %err, "initial want value rejected");
                writeln!(self.output, "** Invalid input: the initial want value is set to zero!")?;
                0
            }
        };

        match self.inventory.add_title(title, want).map(|_| ()) {
            Ok(()) => writeln!(
                self.output,
                "-- A new title ({title}) with the initial want value of {want} is added!"
            ),
            Err(err) => self.report(err),
        }
    }

    fn modify_want(&mut self, title: &str) -> io::Result<()> {
        if self.inventory.find_stock_item(title).is_none() {
            return writeln!(self.output, "Title \"{title}\" cannot be found!");
        }

        let answer = self
            .prompt(&format!("Input the want value for \"{title}\": "))?
            .unwrap_or_default();
        let want = match parse_want(&answer) {
            Ok(want) => want,
            Err(_) => {
                return writeln!(
                    self.output,
                    "The value \"{answer}\" is not a valid want value!"
                );
            }
        };

        match self.inventory.set_want(title, want) {
            Ok(previous) => writeln!(
                self.output,
                "\n-- The want value for \"{title}\" is changed from {previous} to {want}."
            ),
            Err(err) => self.report(err),
        }
    }

    fn deliver(&mut self, title: &str) -> io::Result<()> {
        match self.inventory.deliver(title) {
            Ok(DeliveryOutcome::OutOfStock) => {
                writeln!(self.output, "-- Nothing is currently in stock for \"{title}\"!")?;
                writeln!(self.output, "   Please order first!")
            }
            Ok(DeliveryOutcome::Delivered(people)) if people.is_empty() => {
                writeln!(self.output, "-- Nobody is waiting for \"{title}\".")
            }
            Ok(DeliveryOutcome::Delivered(people)) => {
                for person in people {
                    writeln!(self.output, "-- \"{title}\" is delivered to \"{person}\"")?;
                }
                Ok(())
            }
            Err(err) => self.report(err),
        }
    }

    fn sell(&mut self, title: &str) -> io::Result<()> {
        let Some(item) = self.inventory.find_stock_item(title) else {
            return writeln!(self.output, "Title \"{title}\" cannot be found!");
        };
        if item.have() == 0 {
            writeln!(
                self.output,
                "The title is sold out! Put a name on the waiting list for \"{title}\"."
            )?;
        }

        let Some(buyer) = self.read_person()? else {
            tracing::debug!(title, "input ended before the buyer was named");
            return Ok(());
        };
        match self.inventory.sell(title, buyer.clone()) {
            Ok(Sale::Sold { .. }) => writeln!(self.output, "-- \"{title}\" is sold to {buyer}."),
            Ok(Sale::WaitListed { position }) => writeln!(
                self.output,
                "-- \"{buyer}\" has been put on the waiting list for \"{title}\" (position {position})."
            ),
            Err(err) => self.report(err),
        }
    }

    fn delete_title(&mut self, title: &str) -> io::Result<()> {
        match self.inventory.delete_title(title) {
            Ok(_) => writeln!(self.output, "-- Title ({title}) has been removed!"),
            Err(err) if err.is_not_found() => {
                writeln!(self.output, "** Title ({title}) not found!")
            }
            Err(err) => self.report(err),
        }
    }

    fn delete_customer(&mut self) -> io::Result<()> {
        let Some(person) = self.read_person()? else {
            tracing::debug!("input ended before the customer was named");
            return Ok(());
        };
        match self.inventory.delete_from_customer_list(&person) {
            Ok(_) => writeln!(self.output, "-- Customer ({person}) has been removed!"),
            Err(err) if err.is_not_found() => {
                writeln!(self.output, "** Customer ({person}) not found!")
            }
            Err(err) => self.report(err),
        }
    }

    fn delete_all(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Warning: every title and every customer will be removed!"
        )?;

        let confirmed = loop {
            let Some(answer) = self.prompt("Do you want to proceed (Y/N)? ")? else {
                break false;
            };
            match answer.trim().to_ascii_uppercase().as_str() {
                "Y" => break true,
                "N" => break false,
                _ => continue,
            }
        };

        if confirmed {
            self.inventory.clear();
            writeln!(self.output, "All titles and customers have been removed!")
        } else {
            writeln!(self.output, "Nothing has been removed.")
        }
    }

    fn report(&mut self, err: DomainError) -> io::Result<()> {
        tracing::warn!(error = %err, "command failed");
        writeln!(self.output, "** {err}")
    }
}
