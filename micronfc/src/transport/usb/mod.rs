// micronfc/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

use crate::constants::HID_REPORT_LEN;
use crate::transport::traits::Transport;
use crate::utils::ms;
use crate::{Error, Result};

use rusb::{Context, DeviceHandle};

mod descriptor;
pub use descriptor::{HidEndpoints, find_hid_endpoints};

/// HID-class transport over the board's interrupt endpoints. Requests are
/// written as one zero-padded report and each `receive` reads exactly one
/// report.
///
/// The caller opens the device handle; locating the board on the bus is
/// outside this crate.
pub struct UsbTransport {
    handle: DeviceHandle<Context>,
    endpoints: HidEndpoints,
    write_timeout_ms: u64,
}

impl UsbTransport {
    /// Claim the HID interface of an already-opened board.
    pub fn from_handle(mut handle: DeviceHandle<Context>) -> Result<Self> {
        let endpoints = find_hid_endpoints(&handle.device()).ok_or(rusb::Error::NotFound)?;

        // On Linux the kernel HID driver usually owns the interface.
        if let Ok(true) = handle.kernel_driver_active(endpoints.interface) {
            handle.detach_kernel_driver(endpoints.interface)?;
        }
        handle.claim_interface(endpoints.interface)?;
        log::debug!(
            "claimed interface {} (in={:#04x}, out={:#04x})",
            endpoints.interface,
            endpoints.in_ep,
            endpoints.out_ep
        );

        Ok(Self {
            handle,
            endpoints,
            write_timeout_ms: crate::utils::DEFAULT_READ_TIMEOUT_MS,
        })
    }

    pub fn endpoints(&self) -> HidEndpoints {
        self.endpoints
    }
}

impl Transport for UsbTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        if data.len() > HID_REPORT_LEN {
            return Err(rusb::Error::Overflow.into());
        }
        let mut report = [0u8; HID_REPORT_LEN];
        report[..data.len()].copy_from_slice(data);

        self.handle
            .write_interrupt(self.endpoints.out_ep, &report, ms(self.write_timeout_ms))?;
        Ok(())
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        let mut report = vec![0u8; HID_REPORT_LEN];
        match self
            .handle
            .read_interrupt(self.endpoints.in_ep, &mut report, ms(timeout_ms))
        {
            Ok(n) => {
                report.truncate(n);
                Ok(report)
            }
            Err(rusb::Error::Timeout) => Err(Error::Timeout),
            Err(e) => Err(e.into()),
        }
    }

    fn close(&mut self) -> Result<()> {
        self.handle.release_interface(self.endpoints.interface)?;
        Ok(())
    }
}
