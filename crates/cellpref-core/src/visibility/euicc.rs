use crate::snapshot::EuiccState;

/// Whether the eSIM entry point is offered.
///
/// Developer mode or a previously provisioned eUICC always shows it.
/// Otherwise the device must not be on the ignore list, eSIM UI must be on by
/// default, and the current network country must be supported. An unknown
/// country counts as supported.
pub fn show_euicc_settings(euicc: &EuiccState, network_country_iso: &str) -> bool {
    if !euicc.enabled {
        return false;
    }
    if euicc.developer_mode || euicc.provisioned {
        return true;
    }

    let country = network_country_iso.trim();
    let in_supported_country = country.is_empty()
        || euicc
            .supported_countries
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(country));
    let ignored_device = euicc
        .cid
        .as_deref()
        .is_some_and(|cid| euicc.ignored_cids.iter().any(|c| c == cid));

    !ignored_device && euicc.ui_enabled_by_default && in_supported_country
}
