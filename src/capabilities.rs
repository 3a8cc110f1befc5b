//! The capability surface of a graphics context.
//!
//! A `GraphicsCapabilities` is created per context and probed once on the thread
//! owning it. After that it never changes; a recreated context needs a fresh
//! instance.

use serde::{Deserialize, Serialize};

use crate::driver::{Driver, DriverString};
use crate::entry::{BufferObjectFns, EntryPoints, FramebufferFns, RenderbufferFns};
use crate::errors::*;
use crate::extensions::Extensions;
use crate::info;
use crate::settings::ProbeSettings;
use crate::version::Version;

/// Optional hardware features.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    BufferObjects,
    Framebuffer,
    Renderbuffer,
}

impl Capability {
    pub const ALL: [Capability; 3] = [
        Capability::BufferObjects,
        Capability::Framebuffer,
        Capability::Renderbuffer,
    ];

    pub fn description(self) -> &'static str {
        match self {
            Capability::BufferObjects => "buffer object",
            Capability::Framebuffer => "framebuffer",
            Capability::Renderbuffer => "renderbuffer",
        }
    }
}

/// Whether each optional feature is usable on the current driver.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CapabilityFlags {
    pub buffer_objects: bool,
    pub framebuffer: bool,
    pub renderbuffer: bool,
}

impl CapabilityFlags {
    #[inline]
    pub fn get(&self, capability: Capability) -> bool {
        match capability {
            Capability::BufferObjects => self.buffer_objects,
            Capability::Framebuffer => self.framebuffer,
            Capability::Renderbuffer => self.renderbuffer,
        }
    }

    /// A flag is set iff its entry points are bound.
    fn from_entry_points(entry_points: &EntryPoints) -> Self {
        CapabilityFlags {
            buffer_objects: entry_points.buffer_objects.is_bound(),
            framebuffer: entry_points.framebuffer.is_bound(),
            renderbuffer: entry_points.renderbuffer.is_bound(),
        }
    }
}

/// Lifecycle of a `GraphicsCapabilities`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProbeState {
    Uninitialized,
    Probing,
    Finalized,
}

/// Represents the capabilities of a context.
///
/// Contrary to the state, these values never change once probed.
#[derive(Debug)]
pub struct GraphicsCapabilities {
    state: ProbeState,
    version: Option<Version>,
    vendor: Option<String>,
    renderer: Option<String>,
    extensions: Extensions,
    flags: CapabilityFlags,
    entry_points: EntryPoints,
}

impl Default for GraphicsCapabilities {
    fn default() -> Self {
        GraphicsCapabilities::new()
    }
}

impl GraphicsCapabilities {
    /// Creates an uninitialized instance. Every capability reads as unsupported
    /// until `initialize` completes.
    pub fn new() -> Self {
        GraphicsCapabilities {
            state: ProbeState::Uninitialized,
            version: None,
            vendor: None,
            renderer: None,
            extensions: Extensions::default(),
            flags: CapabilityFlags::default(),
            entry_points: EntryPoints::unbound(),
        }
    }

    /// Creates and initializes an instance for the current context of `driver`.
    pub fn probe<D: Driver + ?Sized>(driver: &D, settings: &ProbeSettings) -> Result<Self> {
        let mut caps = GraphicsCapabilities::new();
        caps.initialize(driver, settings)?;
        Ok(caps)
    }

    /// Probes the driver, binds the optional entry points and fixes the flags.
    ///
    /// Fails with `Error::PlatformUnsupported` if a capability listed as mandatory in
    /// `settings` is missing, and with `Error::AlreadyProbed` on a second call.
    pub fn initialize<D: Driver + ?Sized>(
        &mut self,
        driver: &D,
        settings: &ProbeSettings,
    ) -> Result<()> {
        if self.state != ProbeState::Uninitialized {
            return Err(Error::AlreadyProbed);
        }

        self.state = ProbeState::Probing;

        self.version = driver
            .string(DriverString::Version)
            .and_then(|desc| match Version::parse(&desc) {
                Ok(version) => Some(version),
                Err(err) => {
                    warn!("{} Core profile features will not be assumed.", err);
                    None
                }
            });

        self.vendor = driver.string(DriverString::Vendor);
        self.renderer = driver.string(DriverString::Renderer);
        self.extensions = Extensions::probe(driver);

        let mut entry_points = EntryPoints::bind(driver, self.version, &self.extensions);
        for &capability in &settings.disabled {
            info!("[GL] {} support is disabled by settings.", capability.description());
            unbind(&mut entry_points, capability);
        }

        self.flags = CapabilityFlags::from_entry_points(&entry_points);
        self.entry_points = entry_points;
        self.state = ProbeState::Finalized;

        info!("[GL] Capabilities {:?} with {:?}.", self.flags, self.version);

        if settings.dump_information {
            info::dump_information(driver);
        }

        for &capability in &Capability::ALL {
            if settings.is_mandatory(capability) && !self.flags.get(capability) {
                let err = Error::unsupported(capability);
                error!("[GL] {}", err);
                return Err(err);
            }
        }

        Ok(())
    }

    /// Fails with `Error::PlatformUnsupported` unless `capability` is usable.
    ///
    /// Call this before any code path that would use the entry points of the
    /// capability.
    pub fn require(&self, capability: Capability) -> Result<()> {
        if self.state != ProbeState::Finalized {
            return Err(Error::NotProbed);
        }

        if self.flags.get(capability) {
            Ok(())
        } else {
            Err(Error::unsupported(capability))
        }
    }

    /// Returns true if `capability` is usable. Always false before probing.
    #[inline]
    pub fn is_supported(&self, capability: Capability) -> bool {
        self.state == ProbeState::Finalized && self.flags.get(capability)
    }

    /// The buffer object entry points, guarded.
    pub fn buffer_objects(&self) -> Result<&BufferObjectFns> {
        self.require(Capability::BufferObjects)?;
        Ok(self.entry_points.buffer_objects.fns())
    }

    /// The framebuffer entry points, guarded.
    pub fn framebuffer(&self) -> Result<&FramebufferFns> {
        self.require(Capability::Framebuffer)?;
        Ok(self.entry_points.framebuffer.fns())
    }

    /// The renderbuffer entry points, guarded.
    pub fn renderbuffer(&self) -> Result<&RenderbufferFns> {
        self.require(Capability::Renderbuffer)?;
        Ok(self.entry_points.renderbuffer.fns())
    }

    /// The capability flags. Fails before probing has finished.
    pub fn flags(&self) -> Result<CapabilityFlags> {
        match self.state {
            ProbeState::Finalized => Ok(self.flags),
            _ => Err(Error::NotProbed),
        }
    }

    #[inline]
    pub fn state(&self) -> ProbeState {
        self.state
    }

    #[inline]
    pub fn version(&self) -> Option<Version> {
        self.version
    }

    #[inline]
    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_ref().map(|v| v.as_str())
    }

    #[inline]
    pub fn renderer(&self) -> Option<&str> {
        self.renderer.as_ref().map(|v| v.as_str())
    }

    #[inline]
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    #[inline]
    pub fn entry_points(&self) -> &EntryPoints {
        &self.entry_points
    }
}

fn unbind(entry_points: &mut EntryPoints, capability: Capability) {
    use crate::entry::Binding;

    match capability {
        Capability::BufferObjects => entry_points.buffer_objects = Binding::Unsupported,
        Capability::Framebuffer => entry_points.framebuffer = Binding::Unsupported,
        Capability::Renderbuffer => entry_points.renderbuffer = Binding::Unsupported,
    }
}
