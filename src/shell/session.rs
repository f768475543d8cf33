//! Interactive session controller
//!
//! Owns the storage and the console for one run:
//! parameter entry, then the menu loop until the user exits.

use std::io::Write;

use crate::config::Threshold;
use crate::display::{format_assortment, format_listing_table, STRIPES};
use crate::error::ListingResult;
use crate::export::export_printout;
use crate::models::{Listing, SessionParams};
use crate::services::{filter_listings, sort_and_filter};
use crate::storage::Storage;

use super::console::Console;
use super::input::InputSource;
use super::menu::{render_menu, render_sort_keys, MenuChoice};

const BAD_MENU_CHOICE: &str = "\nPlease enter a number from 1-9!\n";
const BAD_FIELD: &str = "\nIncorrect, commas are not allowed!\n";
const BLANK_ADDRESS: &str = "\nIncorrect, the address cannot be empty!\n";

/// Whether the menu loop keeps going after a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The interactive shell
pub struct Shell<I, W> {
    storage: Storage,
    console: Console<I, W>,
}

impl<I: InputSource, W: Write> Shell<I, W> {
    pub fn new(storage: Storage, console: Console<I, W>) -> Self {
        Self { storage, console }
    }

    /// Read access to the session state
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Give back the storage and console
    pub fn into_parts(self) -> (Storage, Console<I, W>) {
        (self.storage, self.console)
    }

    /// Run the whole session: welcome, parameter entry, menu loop
    pub fn run(&mut self) -> ListingResult<()> {
        self.welcome()?;
        let params = self.collect_params()?;

        loop {
            self.console.say(&render_menu(&self.storage.settings))?;
            let choice =
                self.console
                    .ask_until("Choose an option: ", BAD_MENU_CHOICE, MenuChoice::parse)?;

            if self.execute(choice, &params)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn welcome(&mut self) -> ListingResult<()> {
        self.console.say(STRIPES)?;
        self.console.say(
            "\nWelcome to Kimberlynet - Sweden's largest residential site\n\n\
             We will help you find a property, please answer a few questions before we start!\n",
        )?;
        self.console.say(STRIPES)
    }

    /// Ask for interest, deposit and deduction
    pub fn collect_params(&mut self) -> ListingResult<SessionParams> {
        let interest = self
            .console
            .ask_non_negative_float("Please enter current interest (%): ")?;
        let deposit = self
            .console
            .ask_non_negative_int("Please enter your deposit: ")?;
        let deduction = self
            .console
            .ask_non_negative_float("Please enter current deduction (%): ")?;

        Ok(SessionParams::new(interest, deposit, deduction))
    }

    /// Perform one menu choice
    pub fn execute(&mut self, choice: MenuChoice, params: &SessionParams) -> ListingResult<Flow> {
        match choice {
            MenuChoice::ChangeMonthlyCost => {
                let value = self
                    .console
                    .ask_non_negative_int("Change desired monthly cost to (kr): ")?;
                self.storage.set_threshold(Threshold::MonthlyCost(value));
            }
            MenuChoice::ChangeRent => {
                let value = self
                    .console
                    .ask_non_negative_int("Change desired rent to (kr): ")?;
                self.storage.set_threshold(Threshold::Rent(value));
            }
            MenuChoice::ChangeAreaCost => {
                let value = self
                    .console
                    .ask_non_negative_int("Change desired area cost to (kr): ")?;
                self.storage.set_threshold(Threshold::AreaCost(value));
            }
            MenuChoice::ChangeLivingSpace => {
                let value = self
                    .console
                    .ask_non_negative_float("Change desired area to (kvm): ")?;
                self.storage.set_threshold(Threshold::LivingSpace(value));
            }
            MenuChoice::CreateAssortment => {
                let assortment =
                    filter_listings(self.storage.listings.get_all(), &self.storage.settings, params);
                self.console.say(&format_assortment(&assortment))?;
            }
            MenuChoice::SortByParameter => self.sort_by_parameter(params)?,
            MenuChoice::AddProperty => self.add_property()?,
            MenuChoice::RemoveProperty => self.remove_property()?,
            MenuChoice::Exit => {
                self.storage.save_all()?;
                if let Err(e) = self.storage.flush_journal() {
                    let unlogged = self.storage.journal().pending().len();
                    self.console.say(&format!(
                        "\nWarning: {} changes were saved but not logged: {}",
                        unlogged, e
                    ))?;
                }
                self.console.say("\nThank you for using Kimberlynet!")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn sort_by_parameter(&mut self, params: &SessionParams) -> ListingResult<()> {
        self.console.say(&render_sort_keys())?;
        let key = self
            .console
            .ask_sort_key("Choose one desired parameter to sort properties by: \n")?;

        let assortment = sort_and_filter(
            self.storage.listings.get_all(),
            key,
            &self.storage.settings,
            params,
        );
        self.console.say(&format_assortment(&assortment))?;

        let print = self.console.ask_yes_no(
            "Would you like to print sorted properties to file? Answer Y (yes) or N (no): \n",
        )?;
        if print {
            export_printout(&self.storage.paths().printout_file(), &assortment)?;
            self.console
                .say("\nYour properties were successfully printed to file!\n")
        } else {
            self.console.say("\nYour properties were not printed to file!\n")
        }
    }

    fn add_property(&mut self) -> ListingResult<()> {
        self.console
            .say("\nPlease enter following property information!")?;

        let price = self.console.ask_non_negative_int("Price of property: ")?;
        let area = self.console.ask_positive_float("Area of property: ")?;
        let rent = self.console.ask_non_negative_int("Rent of property: ")?;
        let phone = self
            .console
            .ask_until("Number to property: ", BAD_FIELD, |s| {
                (!s.contains(',')).then(|| s.trim().to_string())
            })?;
        let address = self.console.ask_checked("Address to property: ", |s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(BLANK_ADDRESS)
            } else if trimmed.contains(',') {
                Err(BAD_FIELD)
            } else {
                Ok(trimmed.to_string())
            }
        })?;

        self.storage
            .add_listing(Listing::new(price, area, rent, phone, address))?;
        self.console.say("\nYour property was successfully added!\n")
    }

    fn remove_property(&mut self) -> ListingResult<()> {
        self.console.say("Here are all of the available properties: ")?;
        self.console
            .say(&format_listing_table(self.storage.listings.get_all()))?;
        self.console.say(STRIPES)?;

        let address = self
            .console
            .ask_text("Please enter property (street address) to remove: ")?;

        match self.storage.remove_listing(&address) {
            Some(_) => self.console.say("\nThe property was successfully removed!\n"),
            None => self.console.say("\nThe property does not exist!\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::AppPaths;
    use crate::config::Settings;
    use crate::error::ListingError;
    use crate::shell::input::ScriptedInput;
    use std::fs;
    use tempfile::TempDir;

    const SALES: &str = "1500000,75,4500,070,Birch Lane 1\n\
                         900000,55,3000,071,Oak Street 7\n\
                         4000000,120,2500,072,Harbour View\n";

    fn create_shell(lines: &[&str]) -> (TempDir, Shell<ScriptedInput, Vec<u8>>) {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Sales.csv"), SALES).unwrap();
        fs::write(temp_dir.path().join("Settings.csv"), "10000,8000,30000,50,").unwrap();

        let storage =
            Storage::load(AppPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let console = Console::new(ScriptedInput::new(lines.iter().copied()), Vec::new());
        (temp_dir, Shell::new(storage, console))
    }

    fn output(shell: Shell<ScriptedInput, Vec<u8>>) -> String {
        let (_, console) = shell.into_parts();
        String::from_utf8(console.into_parts().1).unwrap()
    }

    fn params() -> SessionParams {
        SessionParams::new(3.0, 100_000, 30.0)
    }

    #[test]
    fn test_collect_params_retries() {
        let (_temp_dir, mut shell) = create_shell(&["-1", "3,0", "abc", "100000", "30"]);
        let params = shell.collect_params().unwrap();
        assert_eq!(params, SessionParams::new(3.0, 100_000, 30.0));
    }

    #[test]
    fn test_change_thresholds() {
        let (_temp_dir, mut shell) = create_shell(&["9000", "7000", "25000", "60,5"]);
        for choice in [
            MenuChoice::ChangeMonthlyCost,
            MenuChoice::ChangeRent,
            MenuChoice::ChangeAreaCost,
            MenuChoice::ChangeLivingSpace,
        ] {
            assert_eq!(shell.execute(choice, &params()).unwrap(), Flow::Continue);
        }

        assert_eq!(shell.storage().settings, Settings::new(9000, 7000, 25000, 60.5));
    }

    #[test]
    fn test_create_assortment() {
        let (_temp_dir, mut shell) = create_shell(&[]);
        shell.execute(MenuChoice::CreateAssortment, &params()).unwrap();

        let text = output(shell);
        assert!(text.contains("Street address: Birch Lane 1"));
        assert!(text.contains("Street address: Oak Street 7"));
        assert!(!text.contains("Harbour View"));
    }

    #[test]
    fn test_create_assortment_no_matches() {
        let (_temp_dir, mut shell) = create_shell(&["1"]);
        shell.execute(MenuChoice::ChangeRent, &params()).unwrap();
        shell.execute(MenuChoice::CreateAssortment, &params()).unwrap();

        assert!(output(shell).contains("No properties matched your requests!"));
    }

    #[test]
    fn test_sort_and_print_to_file() {
        let (temp_dir, mut shell) = create_shell(&["z", "b", "maybe", "y"]);
        shell.execute(MenuChoice::SortByParameter, &params()).unwrap();

        let text = output(shell);
        let oak = text.find("Oak Street 7").unwrap();
        let birch = text.find("Birch Lane 1").unwrap();
        assert!(oak < birch);
        assert!(text.contains("successfully printed to file"));

        let printout = fs::read_to_string(temp_dir.path().join("Print.csv")).unwrap();
        assert!(printout.starts_with("Price: 900000\n"));
    }

    #[test]
    fn test_sort_without_printing() {
        let (temp_dir, mut shell) = create_shell(&["a", "N"]);
        shell.execute(MenuChoice::SortByParameter, &params()).unwrap();

        assert!(output(shell).contains("were not printed to file"));
        assert!(!temp_dir.path().join("Print.csv").exists());
    }

    #[test]
    fn test_add_property_validates_fields() {
        let (_temp_dir, mut shell) = create_shell(&[
            "1100000", "0", "62", "3000", "074", "", "Cedar, Court", "Cedar Court",
        ]);
        shell.execute(MenuChoice::AddProperty, &params()).unwrap();

        let listings = shell.storage().listings.get_all();
        assert_eq!(listings.len(), 4);
        assert_eq!(
            listings[3],
            Listing::new(1_100_000, 62.0, 3000, "074", "Cedar Court")
        );
    }

    #[test]
    fn test_add_property_explains_rejected_address() {
        let (_temp_dir, mut shell) =
            create_shell(&["1100000", "62", "3000", "074", "  ", "Cedar, Court", "Cedar Court"]);
        shell.execute(MenuChoice::AddProperty, &params()).unwrap();

        let text = output(shell);
        let blank = text.find("the address cannot be empty").unwrap();
        let comma = text.find("commas are not allowed").unwrap();
        assert!(blank < comma);
    }

    #[test]
    fn test_remove_property() {
        let (_temp_dir, mut shell) = create_shell(&["oak street 7", "Nowhere"]);
        shell.execute(MenuChoice::RemoveProperty, &params()).unwrap();
        assert_eq!(shell.storage().listings.count(), 2);

        shell.execute(MenuChoice::RemoveProperty, &params()).unwrap();
        assert_eq!(shell.storage().listings.count(), 2);

        let text = output(shell);
        assert!(text.contains("The property was successfully removed!"));
        assert!(text.contains("The property does not exist!"));
    }

    #[test]
    fn test_run_full_session_saves_on_exit() {
        let (temp_dir, mut shell) = create_shell(&[
            "3", "100000", "30", // session parameters
            "0", "2", "6000", // bad choice, then change rent
            "8", "Harbour View", // remove
            "9",
        ]);
        shell.run().unwrap();

        let text = output(shell);
        assert!(text.contains("Welcome to Kimberlynet"));
        assert!(text.contains("Please enter a number from 1-9!"));
        assert!(text.contains("(< 6000 kr)"));
        assert!(text.contains("Thank you for using Kimberlynet!"));

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("Settings.csv")).unwrap(),
            "10000,6000,30000,50,"
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("Sales.csv")).unwrap(),
            "1500000,75,4500,070,Birch Lane 1\n900000,55,3000,071,Oak Street 7\n"
        );
    }

    #[test]
    fn test_unwritable_audit_log_does_not_end_session() {
        let (temp_dir, mut shell) =
            create_shell(&["3", "100000", "30", "2", "6000", "9"]);
        fs::create_dir(temp_dir.path().join("audit.log")).unwrap();

        shell.run().unwrap();

        let text = output(shell);
        // the rent change and the exit save
        assert!(text.contains("2 changes were saved but not logged"));
        assert!(text.contains("Thank you for using Kimberlynet!"));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("Settings.csv")).unwrap(),
            "10000,6000,30000,50,"
        );
    }

    #[test]
    fn test_run_without_exit_does_not_save() {
        let (temp_dir, mut shell) = create_shell(&["3", "100000", "30", "2", "6000"]);
        let err = shell.run().unwrap_err();

        assert!(matches!(err, ListingError::Input(_)));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("Settings.csv")).unwrap(),
            "10000,8000,30000,50,"
        );
        assert!(!temp_dir.path().join("audit.log").exists());
    }
}
