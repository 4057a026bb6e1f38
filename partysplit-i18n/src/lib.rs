#[cfg(all(feature = "es", feature = "en"))]
compile_error!("Cannot enable both 'es' and 'en' features at the same time");

#[cfg(feature = "es")]
pub mod strings {
    pub const TRANSFERS: &str = "Transferencias";
    pub const POSITION: &str = "#";
    pub const NAME: &str = "Nombre";
    pub const SPENT: &str = "Gastado";
    pub const ALIAS: &str = "Alias";
    pub const ENABLED: &str = "Activo";
    pub const FROM: &str = "De";
    pub const TO: &str = "Para";
    pub const AMOUNT: &str = "Monto";
    pub const YES: &str = "sí";
    pub const NO: &str = "no";
    pub const UNNAMED: &str = "(sin nombre)";
    pub const EMPTY_ROSTER: &str = "No hay personas cargadas.";
    pub const NOTHING_TO_SETTLE: &str = "No hay transferencias pendientes.";
    pub const IMPORT_FAILED: &str = "Error al importar el archivo JSON.";
    pub const EXPORT_FAILED: &str = "Error al exportar los datos.";
    pub const STORAGE_FAILED: &str = "No se pudo guardar la lista de personas.";
}

#[cfg(not(feature = "es"))]
pub mod strings {
    pub const TRANSFERS: &str = "Transfers";
    pub const POSITION: &str = "#";
    pub const NAME: &str = "Name";
    pub const SPENT: &str = "Spent";
    pub const ALIAS: &str = "Alias";
    pub const ENABLED: &str = "Enabled";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const YES: &str = "yes";
    pub const NO: &str = "no";
    pub const UNNAMED: &str = "(unnamed)";
    pub const EMPTY_ROSTER: &str = "No participants yet.";
    pub const NOTHING_TO_SETTLE: &str = "Nothing to settle.";
    pub const IMPORT_FAILED: &str = "Failed to import the JSON file.";
    pub const EXPORT_FAILED: &str = "Failed to export the data.";
    pub const STORAGE_FAILED: &str = "Could not save the participant list.";
}

pub use strings::*;

use std::fmt::{self, Display};

pub struct TransferInstruction<'a, A> {
    from: &'a str,
    to: &'a str,
    alias: &'a str,
    amount: A,
}

/// One line telling `from` how much to pay `to` and where.
pub fn transfer_instruction<'a, A: Display>(
    from: &'a str,
    to: &'a str,
    alias: &'a str,
    amount: A,
) -> TransferInstruction<'a, A> {
    TransferInstruction {
        from,
        to,
        alias,
        amount,
    }
}

#[cfg(feature = "es")]
impl<A: Display> Display for TransferInstruction<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} debe pagar ${} a {} (Alias: {})",
            self.from, self.amount, self.to, self.alias
        )
    }
}

#[cfg(not(feature = "es"))]
impl<A: Display> Display for TransferInstruction<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pays ${} to {} (Alias: {})",
            self.from, self.amount, self.to, self.alias
        )
    }
}

#[cfg(feature = "es")]
pub fn participant_not_found(position: usize, len: usize) -> String {
    format!("No existe la persona #{position} (la lista tiene {len})")
}

#[cfg(not(feature = "es"))]
pub fn participant_not_found(position: usize, len: usize) -> String {
    format!("There is no participant #{position} (the roster has {len})")
}

#[cfg(feature = "es")]
pub fn spent_not_a_number(spent: impl Display) -> String {
    format!("El monto gastado debe ser un número (se recibió {spent})")
}

#[cfg(not(feature = "es"))]
pub fn spent_not_a_number(spent: impl Display) -> String {
    format!("The spent amount must be a number (got {spent})")
}

#[cfg(feature = "es")]
pub fn import_not_an_array(found: &str) -> String {
    format!("El archivo debe contener una lista de personas, pero contiene {found}")
}

#[cfg(not(feature = "es"))]
pub fn import_not_an_array(found: &str) -> String {
    format!("The file must contain a list of participants, but it contains {found}")
}

#[cfg(feature = "es")]
pub fn import_invalid_record(position: usize) -> String {
    format!("La persona #{position} del archivo no es válida")
}

#[cfg(not(feature = "es"))]
pub fn import_invalid_record(position: usize) -> String {
    format!("Participant #{position} in the file is not valid")
}

#[cfg(feature = "es")]
pub fn exported_to(path: impl Display) -> String {
    format!("Datos exportados a {path}")
}

#[cfg(not(feature = "es"))]
pub fn exported_to(path: impl Display) -> String {
    format!("Data exported to {path}")
}

#[cfg(feature = "es")]
pub fn imported_participants(count: usize) -> String {
    format!("Se importaron {count} personas")
}

#[cfg(not(feature = "es"))]
pub fn imported_participants(count: usize) -> String {
    format!("Imported {count} participants")
}
