//! Interface Segregation: one fat machine trait versus small role traits.
//!
//! [`OldFashionedPrinter`] is kept as the negative example. It is forced to
//! implement [`Machine`] and answers `scan` / `fax` with
//! [`DomainError::NotImplemented`].

use crate::domain::error::DomainError;

/// A document handed to office devices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

// ── The fat interface ─────────────────────────────────────────────────────────

/// Every device must print, scan and fax, whether it can or not.
pub trait Machine {
    fn print(&self, doc: &Document) -> Result<String, DomainError>;
    fn scan(&self, doc: &Document) -> Result<String, DomainError>;
    fn fax(&self, doc: &Document) -> Result<String, DomainError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MultiFunctionPrinter;

impl Machine for MultiFunctionPrinter {
    fn print(&self, doc: &Document) -> Result<String, DomainError> {
        Ok(format!("Printing '{}'", doc.title))
    }

    fn scan(&self, doc: &Document) -> Result<String, DomainError> {
        Ok(format!("Scanning '{}'", doc.title))
    }

    fn fax(&self, doc: &Document) -> Result<String, DomainError> {
        Ok(format!("Faxing '{}'", doc.title))
    }
}

/// Can only print, yet has to carry `scan` and `fax`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OldFashionedPrinter;

impl Machine for OldFashionedPrinter {
    fn print(&self, doc: &Document) -> Result<String, DomainError> {
        Ok(format!("Printing '{}' the old way", doc.title))
    }

    fn scan(&self, _doc: &Document) -> Result<String, DomainError> {
        Err(DomainError::NotImplemented {
            device: "OldFashionedPrinter",
            operation: "scan",
        })
    }

    fn fax(&self, _doc: &Document) -> Result<String, DomainError> {
        Err(DomainError::NotImplemented {
            device: "OldFashionedPrinter",
            operation: "fax",
        })
    }
}

// ── Segregated roles ──────────────────────────────────────────────────────────

pub trait Printer {
    fn print(&self, doc: &Document) -> String;
}

pub trait Scanner {
    fn scan(&self, doc: &Document) -> String;
}

/// A device that does both jobs.
pub trait MultiFunctionDevice: Printer + Scanner {}

impl<T: Printer + Scanner> MultiFunctionDevice for T {}

#[derive(Debug, Default, Clone, Copy)]
pub struct Photocopier;

impl Printer for Photocopier {
    fn print(&self, doc: &Document) -> String {
        format!("Photocopier prints '{}'", doc.title)
    }
}

impl Scanner for Photocopier {
    fn scan(&self, doc: &Document) -> String {
        format!("Photocopier scans '{}'", doc.title)
    }
}

/// Plain printer used as a building block.
#[derive(Debug, Default, Clone, Copy)]
pub struct LaserPrinter;

impl Printer for LaserPrinter {
    fn print(&self, doc: &Document) -> String {
        format!("Laser printer prints '{}'", doc.title)
    }
}

/// Plain scanner used as a building block.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlatbedScanner;

impl Scanner for FlatbedScanner {
    fn scan(&self, doc: &Document) -> String {
        format!("Flatbed scanner scans '{}'", doc.title)
    }
}

/// Composes a printer and a scanner and delegates to them.
pub struct MultiFunctionMachine {
    printer: Box<dyn Printer>,
    scanner: Box<dyn Scanner>,
}

impl MultiFunctionMachine {
    pub fn new(printer: Box<dyn Printer>, scanner: Box<dyn Scanner>) -> Self {
        Self { printer, scanner }
    }
}

impl Printer for MultiFunctionMachine {
    fn print(&self, doc: &Document) -> String {
        self.printer.print(doc)
    }
}

impl Scanner for MultiFunctionMachine {
    fn scan(&self, doc: &Document) -> String {
        self.scanner.scan(doc)
    }
}
