//! Text rendering of dispatch tables as array-literal fragments.
//!
//! ```text
//!     const opcodeCallback_t opcodeDecoderTable[] = {   <- declaration only
//!         gbaemu::gba::cpu::impl::sdt::opcode_str_LSL_Rm_0, // 0x600
//!         NULL, // 0x609
//!     };                                                 <- declaration only
//! ```

use std::io::{self, Write};

use crate::dispatch::DispatchTable;

const DECLARATION_INDENT: &str = "    ";
const ENTRY_INDENT: &str = "        ";

/// Element type and name of the array wrapping a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayDeclaration<'a> {
    pub element_type: &'a str,
    pub name: &'a str,
}

/// Writes one line per entry: the handler (or `NULL`) and its hex index.
///
/// # Errors
///
/// Fails as soon as `out` rejects a write.
pub fn write_fragment<W: Write>(table: &DispatchTable, out: &mut W) -> io::Result<()> {
    for entry in table.entries() {
        writeln!(
            out,
            "{ENTRY_INDENT}{}, // 0x{:03x}",
            entry.handler, entry.annotation
        )?;
    }

    Ok(())
}

/// Writes the fragment wrapped in an array declaration.
///
/// # Errors
///
/// Fails as soon as `out` rejects a write.
pub fn write_declaration<W: Write>(
    table: &DispatchTable,
    declaration: ArrayDeclaration<'_>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(
        out,
        "{DECLARATION_INDENT}const {} {}[] = {{",
        declaration.element_type, declaration.name
    )?;
    write_fragment(table, out)?;
    writeln!(out, "{DECLARATION_INDENT}}};")
}
