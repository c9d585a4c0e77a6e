// micronfc/src/transport/usb/descriptor.rs

use rusb::{Device, Direction, TransferType, UsbContext};

/// Interrupt endpoint pair of the board's HID interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HidEndpoints {
    pub interface: u8,
    pub in_ep: u8,
    pub out_ep: u8,
}

/// Inspect the active configuration and return the first interface that
/// exposes both an interrupt IN and an interrupt OUT endpoint.
pub fn find_hid_endpoints<T: UsbContext>(device: &Device<T>) -> Option<HidEndpoints> {
    let config = device.active_config_descriptor().ok()?;

    for interface in config.interfaces() {
        for interface_desc in interface.descriptors() {
            let mut in_ep = None;
            let mut out_ep = None;
            for endpoint_desc in interface_desc.endpoint_descriptors() {
                if endpoint_desc.transfer_type() != TransferType::Interrupt {
                    continue;
                }
                match endpoint_desc.direction() {
                    Direction::In if in_ep.is_none() => in_ep = Some(endpoint_desc.address()),
                    Direction::Out if out_ep.is_none() => out_ep = Some(endpoint_desc.address()),
                    _ => {}
                }
            }
            if let (Some(in_ep), Some(out_ep)) = (in_ep, out_ep) {
                return Some(HidEndpoints {
                    interface: interface_desc.interface_number(),
                    in_ep,
                    out_ep,
                });
            }
        }
    }

    None
}
