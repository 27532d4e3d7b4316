use crate::config::toml_config::{ShellConfig, SummaryFormat};
use crate::core::fleet::FleetManager;
use crate::domain::model::{
    ContainerKind, ContainerSpec, Measurements, PayloadSpec, RefrigerationSpec, Report, ShipSpec,
};
use crate::domain::ports::{ReportSink, SerialNumberSource};
use crate::utils::error::{FleetError, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddShip,
    RemoveShip,
    AddContainer,
    UnloadContainer,
    ReplaceContainer,
    ShowShip,
    ReportHazard,
    Exit,
}

const MENU: &[(MenuChoice, &str)] = &[
    (MenuChoice::AddShip, "Add a container ship"),
    (MenuChoice::RemoveShip, "Remove a container ship"),
    (MenuChoice::AddContainer, "Add a container"),
    (MenuChoice::UnloadContainer, "Unload a container"),
    (MenuChoice::ReplaceContainer, "Replace a container"),
    (MenuChoice::ShowShip, "Show ship info"),
    (MenuChoice::ReportHazard, "Report a hazard"),
    (MenuChoice::Exit, "Exit"),
];

impl FromStr for MenuChoice {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("q") {
            return Ok(MenuChoice::Exit);
        }
        input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| MENU.get(i))
            .map(|(choice, _)| *choice)
            .ok_or_else(|| FleetError::InvalidInput {
                field: "menu choice".to_string(),
                input: input.to_string(),
            })
    }
}

fn is_end_of_input(err: &FleetError) -> bool {
    matches!(err, FleetError::IoError(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
}

/// Reports `err` through the fleet's sink and hands it back.
fn reject<G, R, T>(fleet: &mut FleetManager<G, R>, err: FleetError) -> Result<T>
where
    G: SerialNumberSource,
    R: ReportSink,
{
    fleet
        .sink_mut()
        .report(Report::error(err.user_friendly_message()));
    Err(err)
}

/// Text menu driving a [`FleetManager`].
///
/// Prompts and listings go to `output`; operation results go to the
/// manager's report sink. Every error an action returns has already been
/// reported, so the loop only needs to tell end-of-input and I/O failures
/// apart from the rest.
pub struct FleetShell<In: BufRead, Out: Write> {
    input: In,
    output: Out,
    prompt: String,
    summary_format: SummaryFormat,
}

impl<In: BufRead, Out: Write> FleetShell<In, Out> {
    pub fn new(input: In, output: Out, settings: &ShellConfig) -> Self {
        Self {
            input,
            output,
            prompt: settings.prompt.clone(),
            summary_format: settings.summary_format,
        }
    }

    pub fn into_output(self) -> Out {
        self.output
    }

    pub fn run<G, R>(&mut self, fleet: &mut FleetManager<G, R>) -> Result<()>
    where
        G: SerialNumberSource,
        R: ReportSink,
    {
        loop {
            self.print_menu()?;
            let prompt = self.prompt.clone();
            let line = match self.read_value(&prompt) {
                Ok(line) => line,
                Err(e) if is_end_of_input(&e) => return Ok(()),
                Err(e) => return Err(e),
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(_) => {
                    fleet
                        .sink_mut()
                        .report(Report::warning("Invalid choice. Please choose again."));
                    continue;
                }
            };

            if choice == MenuChoice::Exit {
                fleet.sink_mut().report(Report::info("Exiting the program..."));
                return Ok(());
            }

            match self.dispatch(choice, fleet) {
                Ok(()) => {}
                Err(e) if is_end_of_input(&e) => return Ok(()),
                Err(FleetError::IoError(e)) => return Err(FleetError::IoError(e)),
                Err(e) => tracing::debug!("{:?} aborted: {}", choice, e),
            }
        }
    }

    fn dispatch<G, R>(&mut self, choice: MenuChoice, fleet: &mut FleetManager<G, R>) -> Result<()>
    where
        G: SerialNumberSource,
        R: ReportSink,
    {
        match choice {
            MenuChoice::AddShip => self.add_ship(fleet),
            MenuChoice::RemoveShip => self.remove_ship(fleet),
            MenuChoice::AddContainer => self.add_container(fleet),
            MenuChoice::UnloadContainer => self.unload_container(fleet),
            MenuChoice::ReplaceContainer => self.replace_container(fleet),
            MenuChoice::ShowShip => {
                let index = self.select_ship(fleet, "Select the number of the container ship: ")?;
                self.show_summary(fleet, index)
            }
            MenuChoice::ReportHazard => self.report_hazard(fleet),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nEnter what you want to do (1-{}):", MENU.len())?;
        for (i, (_, label)) in MENU.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, label)?;
        }
        Ok(())
    }

    fn read_value(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(FleetError::IoError(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn read_field<T, G, R>(&mut self, fleet: &mut FleetManager<G, R>, prompt: &str, field: &str) -> Result<T>
    where
        T: FromStr,
        G: SerialNumberSource,
        R: ReportSink,
    {
        let input = self.read_value(prompt)?;
        match input.trim().parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) => reject(
                fleet,
                FleetError::InvalidInput {
                    field: field.to_string(),
                    input: input.trim().to_string(),
                },
            ),
        }
    }

    /// Lists the ships and returns the zero-based index of the chosen one.
    fn select_ship<G, R>(&mut self, fleet: &mut FleetManager<G, R>, prompt: &str) -> Result<usize>
    where
        G: SerialNumberSource,
        R: ReportSink,
    {
        if fleet.registry().is_empty() {
            fleet.sink_mut().report(Report::warning(
                "No container ships available. Please add a container ship first.",
            ));
            return Err(FleetError::IndexOutOfRange { index: 0, len: 0 });
        }

        writeln!(self.output, "Available container ships:")?;
        for (i, ship) in fleet.registry().list_ships() {
            writeln!(self.output, "{}. {}", i + 1, ship.name())?;
        }

        let number: usize = self.read_field(fleet, prompt, "ship number")?;
        let len = fleet.registry().len();
        match number.checked_sub(1).filter(|&i| i < len) {
            Some(index) => Ok(index),
            None => reject(fleet, FleetError::IndexOutOfRange { index: number, len }),
        }
    }

    fn add_ship<G, R>(&mut self, fleet: &mut FleetManager<G, R>) -> Result<()>
    where
        G: SerialNumberSource,
        R: ReportSink,
    {
        writeln!(self.output, "Adding a container ship...")?;
        let name = self.read_value("Enter ship name: ")?.trim().to_string();
        let max_speed = self.read_field(fleet, "Enter max speed (knots): ", "max speed")?;
        let max_container_num =
            self.read_field(fleet, "Enter max container capacity: ", "max container capacity")?;
        let max_weight =
            self.read_field(fleet, "Enter max weight capacity (tons): ", "max weight capacity")?;

        fleet.add_ship(ShipSpec {
            name,
            max_speed,
            max_container_num,
            max_weight,
        })?;
        Ok(())
    }

    fn remove_ship<G, R>(&mut self, fleet: &mut FleetManager<G, R>) -> Result<()>
    where
        G: SerialNumberSource,
        R: ReportSink,
    {
        writeln!(self.output, "Removing a container ship...")?;
        let index = self.select_ship(fleet, "Enter the number of the ship to remove: ")?;
        fleet.remove_ship(index)?;
        Ok(())
    }

    fn add_container<G, R>(&mut self, fleet: &mut FleetManager<G, R>) -> Result<()>
    where
        G: SerialNumberSource,
        R: ReportSink,
    {
        writeln!(self.output, "Adding a container...")?;
        let index = self.select_ship(
            fleet,
            "Select the number of the container ship to add the container to: ",
        )?;
        let spec = self.read_container_spec(fleet)?;
        let container = fleet.create_container(spec)?;

        if container.as_cargo_hold().is_some() {
            let input = self.read_value("Enter cargo mass to fill (kg, blank to skip): ")?;
            if !input.trim().is_empty() {
                let cargo_mass = match input.trim().parse::<f64>() {
                    Ok(mass) => mass,
                    Err(_) => {
                        return reject(
                            fleet,
                            FleetError::InvalidInput {
                                field: "cargo mass".to_string(),
                                input: input.trim().to_string(),
                            },
                        )
                    }
                };
                // 超載只回報，貨櫃照樣上船
                if fleet.load_cargo(&container, cargo_mass).is_err() {
                    tracing::debug!("Loading {} without cargo fill", container.serial());
                }
            }
        }

        fleet.load_container(index, container)?;
        Ok(())
    }

    fn unload_container<G, R>(&mut self, fleet: &mut FleetManager<G, R>) -> Result<()>
    where
        G: SerialNumberSource,
        R: ReportSink,
    {
        let index = self.select_ship(fleet, "Select the number of the container ship: ")?;
        let serial = self.read_value("Enter container serial number: ")?;
        fleet.unload_container(index, serial.trim())?;
        Ok(())
    }

    fn replace_container<G, R>(&mut self, fleet: &mut FleetManager<G, R>) -> Result<()>
    where
        G: SerialNumberSource,
        R: ReportSink,
    {
        let index = self.select_ship(fleet, "Select the number of the container ship: ")?;
        let serial = self.read_value("Enter serial number of the container to replace: ")?;
        let spec = self.read_container_spec(fleet)?;
        let container = fleet.create_container(spec)?;
        fleet.replace_container(index, serial.trim(), container)?;
        Ok(())
    }

    fn report_hazard<G, R>(&mut self, fleet: &mut FleetManager<G, R>) -> Result<()>
    where
        G: SerialNumberSource,
        R: ReportSink,
    {
        let index = self.select_ship(fleet, "Select the number of the container ship: ")?;
        let serial = self.read_value("Enter container serial number: ")?;
        fleet.notify_hazard_on(index, serial.trim())?;
        Ok(())
    }

    /// Prints the summary of one ship in the configured format.
    pub fn show_summary<G, R>(&mut self, fleet: &mut FleetManager<G, R>, index: usize) -> Result<()>
    where
        G: SerialNumberSource,
        R: ReportSink,
    {
        let summary = fleet.ship_summary(index)?;
        match self.summary_format {
            SummaryFormat::Text => writeln!(self.output, "{}", summary)?,
            SummaryFormat::Json => {
                let json = match serde_json::to_string_pretty(&summary) {
                    Ok(json) => json,
                    Err(e) => return reject(fleet, e.into()),
                };
                writeln!(self.output, "{}", json)?;
            }
        }
        Ok(())
    }

    fn read_container_spec<G, R>(&mut self, fleet: &mut FleetManager<G, R>) -> Result<ContainerSpec>
    where
        G: SerialNumberSource,
        R: ReportSink,
    {
        let kind_input = self.read_value("Enter container type (Liquid/Gas/Refrigerated): ")?;
        let kind = match kind_input.parse::<ContainerKind>() {
            Ok(kind) => kind,
            Err(e) => return reject(fleet, e),
        };

        let measurements = Measurements {
            mass: self.read_field(fleet, "Enter mass (kg): ", "mass")?,
            height: self.read_field(fleet, "Enter height (cm): ", "height")?,
            tare_weight: self.read_field(fleet, "Enter tare weight (kg): ", "tare weight")?,
            depth: self.read_field(fleet, "Enter depth (cm): ", "depth")?,
        };

        let spec = match kind {
            ContainerKind::Liquid => ContainerSpec::Liquid {
                measurements,
                payload: self.read_payload(fleet)?,
            },
            ContainerKind::Gas => ContainerSpec::Gas {
                measurements,
                payload: self.read_payload(fleet)?,
            },
            ContainerKind::Refrigerated => ContainerSpec::Refrigerated {
                measurements,
                refrigeration: RefrigerationSpec {
                    product_type: self.read_value("Enter product type: ")?.trim().to_string(),
                    temperature: self.read_field(fleet, "Enter temperature (°C): ", "temperature")?,
                },
            },
        };
        Ok(spec)
    }

    fn read_payload<G, R>(&mut self, fleet: &mut FleetManager<G, R>) -> Result<PayloadSpec>
    where
        G: SerialNumberSource,
        R: ReportSink,
    {
        Ok(PayloadSpec {
            max_payload: self.read_field(fleet, "Enter max payload (kg): ", "max payload")?,
            pressure: self.read_field(fleet, "Enter pressure (atm): ", "pressure")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::AddShip);
        assert_eq!(" 3 ".parse::<MenuChoice>().unwrap(), MenuChoice::AddContainer);
        assert_eq!("8".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert_eq!("EXIT".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert!("0".parse::<MenuChoice>().is_err());
        assert!("9".parse::<MenuChoice>().is_err());
        assert!("ship".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_end_of_input_detection() {
        let eof = FleetError::IoError(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "closed",
        ));
        assert!(is_end_of_input(&eof));
        assert!(!is_end_of_input(&FleetError::IndexOutOfRange { index: 0, len: 0 }));
    }
}
