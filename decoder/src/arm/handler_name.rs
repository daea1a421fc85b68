use super::legend::DecodeFields;

/// Path of the module exporting the single data transfer handlers.
pub const HANDLER_NAMESPACE: &str = "gbaemu::gba::cpu::impl::sdt::";

/// Builds the symbol of the handler serving `fields`, for example
/// `gbaemu::gba::cpu::impl::sdt::opcode_ldrpub_LSR_Rm_0`.
///
/// The symbol must match the handler set byte for byte; nothing here can
/// check that it exists.
#[must_use]
pub fn handler_name(fields: &DecodeFields) -> String {
    format!(
        "{HANDLER_NAMESPACE}opcode_{}{}_{}",
        fields.function, fields.variant, fields.shift
    )
}
