use crate::driver::{Driver, DriverString};
use crate::extensions::tokenize;

/// Logs the identification strings and advertised extensions of the driver.
pub fn dump_information<D: Driver + ?Sized>(driver: &D) {
    let unknown = || "<unknown>".to_owned();

    info!("OpenGL Information");
    info!("--------------------------------------------");
    info!("Vendor     : {}", driver.string(DriverString::Vendor).unwrap_or_else(unknown));
    info!("Renderer   : {}", driver.string(DriverString::Renderer).unwrap_or_else(unknown));
    info!("Version    : {}", driver.string(DriverString::Version).unwrap_or_else(unknown));

    let extensions = driver.extensions().unwrap_or_default();
    for (i, name) in tokenize(&extensions).enumerate() {
        if i == 0 {
            info!("Extensions : {}", name);
        } else {
            info!("             {}", name);
        }
    }

    info!("--------------------------------------------");
}
