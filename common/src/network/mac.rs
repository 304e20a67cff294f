use std::sync::OnceLock;

use mac_oui::Oui;
use pnet::util::MacAddr;
use tracing::debug;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Retrieves or initializes the **Organizationally unique identifier** database.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB
        .get_or_init(|| match Oui::default() {
            Ok(db) => Some(db),
            Err(e) => {
                debug!("OUI database unavailable: {e}");
                None
            }
        })
        .as_ref()
}

/// Identify the vendor behind a hardware address reported by a target.
///
/// The all-zero placeholder and unparsable strings never resolve.
pub fn get_vendor(hw_addr: &str) -> Option<String> {
    let mac: MacAddr = hw_addr.parse().ok()?;
    if mac == MacAddr::zero() {
        return None;
    }
    match get_oui_db()?.lookup_by_mac(&mac.to_string()) {
        Ok(Some(entry)) => Some(entry.company_name.clone()),
        _ => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
