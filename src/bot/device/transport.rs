use crate::bot::common::error::Result;
use crate::bot::device::types::{Address, Endpoint};

pub trait DeviceTransport {
    fn connect(&self, addr: &Address) -> Result<()>;
    fn devices(&self) -> Result<Vec<Endpoint>>;
    fn screencap(&self, endpoint: &Endpoint) -> Result<Vec<u8>>;
    fn tap(&self, endpoint: &Endpoint, x: u32, y: u32) -> Result<()>;
}
