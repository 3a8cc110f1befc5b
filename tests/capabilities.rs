extern crate env_logger;
extern crate glcaps;

use glcaps::entry::{BufferObjectFns, FramebufferFns, RenderbufferFns};
use glcaps::prelude::*;

fn setup() {
    let _ = env_logger::try_init();
}

fn desktop_with_extensions() -> HeadlessDriver {
    let mut driver = HeadlessDriver::new(
        "2.1 Mesa 10.1",
        "GL_EXT_framebuffer_object GL_ARB_vertex_buffer_object",
    );

    driver
        .expose::<BufferObjectFns>("ARB")
        .expose::<FramebufferFns>("EXT")
        .expose::<RenderbufferFns>("EXT");
    driver
}

fn optional_only() -> ProbeSettings {
    ProbeSettings {
        mandatory: Vec::new(),
        ..ProbeSettings::default()
    }
}

#[test]
fn extension_variants() {
    setup();

    let driver = desktop_with_extensions();
    let caps = GraphicsCapabilities::probe(&driver, &ProbeSettings::default()).unwrap();

    assert_eq!(caps.state(), ProbeState::Finalized);
    assert_eq!(caps.version(), Some(Version::GL(2, 1)));
    assert_eq!(caps.vendor(), Some("crayon"));
    assert_eq!(caps.renderer(), Some("headless"));

    let flags = caps.flags().unwrap();
    assert!(flags.buffer_objects);
    assert!(flags.framebuffer);
    assert!(flags.renderbuffer);

    let entry_points = caps.entry_points();
    assert_eq!(
        entry_points.buffer_objects.extension(),
        Some("GL_ARB_vertex_buffer_object")
    );
    assert_eq!(
        entry_points.framebuffer.extension(),
        Some("GL_EXT_framebuffer_object")
    );
    assert_eq!(
        entry_points.renderbuffer.extension(),
        Some("GL_EXT_framebuffer_object")
    );

    for &capability in &Capability::ALL {
        assert!(caps.require(capability).is_ok());
        assert!(caps.is_supported(capability));
    }
}

#[test]
fn core_profile() {
    setup();

    let mut driver = HeadlessDriver::new("3.3.0 NVIDIA 390.87", "");
    driver
        .expose::<BufferObjectFns>("")
        .expose::<FramebufferFns>("")
        .expose::<RenderbufferFns>("");

    let caps = GraphicsCapabilities::probe(&driver, &ProbeSettings::default()).unwrap();
    match caps.entry_points().framebuffer {
        Binding::Core(_) => {}
        ref v => panic!("unexpected binding {:?}", v),
    }

    match caps.entry_points().buffer_objects {
        Binding::Core(_) => {}
        ref v => panic!("unexpected binding {:?}", v),
    }
}

#[test]
fn embedded_mapbuffer_mixes_suffixes() {
    setup();

    // Buffer functions are core in ES 2.0; only mapping comes from GL_OES_mapbuffer.
    let mut driver = HeadlessDriver::new("OpenGL ES 2.0 build 1.8", "GL_OES_mapbuffer");
    driver
        .expose::<BufferObjectFns>("")
        .expose::<BufferObjectFns>("OES")
        .expose::<FramebufferFns>("")
        .expose::<RenderbufferFns>("");
    driver
        .hide("glMapBuffer")
        .hide("glUnmapBuffer")
        .hide("glBindBufferOES")
        .hide("glGenBuffersOES");

    let caps = GraphicsCapabilities::probe(&driver, &ProbeSettings::default()).unwrap();
    assert!(caps.is_supported(Capability::BufferObjects));
    assert_eq!(
        caps.entry_points().buffer_objects.extension(),
        Some("GL_OES_mapbuffer")
    );

    let buffers = caps.buffer_objects().unwrap();
    let mut id = 0;
    unsafe {
        (buffers.gen_buffers)(1, &mut id);
        (buffers.bind_buffer)(glcaps::consts::ARRAY_BUFFER, id);
        assert_eq!((buffers.unmap_buffer)(glcaps::consts::ARRAY_BUFFER), 1);
    }
    assert!(id != 0);
}

#[test]
fn embedded_without_mapping() {
    setup();

    // The symbols exist, but nothing advertises mapping on ES 2.0.
    let mut driver = HeadlessDriver::new("OpenGL ES 2.0", "");
    driver
        .expose::<BufferObjectFns>("")
        .expose::<FramebufferFns>("")
        .expose::<RenderbufferFns>("");

    let caps = GraphicsCapabilities::probe(&driver, &ProbeSettings::default()).unwrap();
    assert!(!caps.is_supported(Capability::BufferObjects));
    assert!(caps.is_supported(Capability::Framebuffer));

    let err = caps.require(Capability::BufferObjects).unwrap_err();
    assert_eq!(err.capability(), Some(Capability::BufferObjects));
    assert!(format!("{}", err).contains("buffer object"));
    assert!(caps.buffer_objects().is_err());
}

#[test]
fn missing_extension_means_unsupported() {
    setup();

    let mut driver = HeadlessDriver::new("2.1 Mesa 10.1", "GL_ARB_vertex_buffer_object");
    driver
        .expose::<BufferObjectFns>("ARB")
        .expose::<FramebufferFns>("EXT")
        .expose::<RenderbufferFns>("EXT");

    assert!(!has_extension(&driver, "GL_EXT_framebuffer_object"));

    let caps = GraphicsCapabilities::probe(&driver, &optional_only()).unwrap();
    assert!(!caps.is_supported(Capability::Framebuffer));
    assert!(!caps.is_supported(Capability::Renderbuffer));
    assert!(!caps.entry_points().framebuffer.is_bound());

    let err = caps.require(Capability::Framebuffer).unwrap_err();
    assert_eq!(format!("{}", err), "no framebuffer support");
}

#[test]
fn mandatory_framebuffer_fails_initialization() {
    setup();

    let driver = HeadlessDriver::new("2.1 Mesa 10.1", "GL_ARB_vertex_buffer_object");
    let err = GraphicsCapabilities::probe(&driver, &ProbeSettings::default()).unwrap_err();

    match err {
        Error::PlatformUnsupported {
            capability,
            ref reason,
        } => {
            assert_eq!(capability, Some(Capability::Framebuffer));
            assert!(reason.contains("framebuffer"));
        }
        ref v => panic!("unexpected error {:?}", v),
    }
}

#[test]
fn lying_driver_is_downgraded() {
    setup();

    let mut driver = desktop_with_extensions();
    driver.hide("glCheckFramebufferStatusEXT");

    let mut caps = GraphicsCapabilities::new();
    let err = caps.initialize(&driver, &ProbeSettings::default()).unwrap_err();
    assert_eq!(err.capability(), Some(Capability::Framebuffer));

    // Probing still finished; the flags agree with the bindings.
    assert_eq!(caps.state(), ProbeState::Finalized);
    let flags = caps.flags().unwrap();
    assert!(!flags.framebuffer);
    assert!(flags.renderbuffer);
    assert!(!caps.entry_points().framebuffer.is_bound());
    assert!(caps.extensions().gl_ext_framebuffer_object);
}

#[test]
fn fallback_to_later_variant() {
    setup();

    // ARB is tried first but only EXT symbols exist.
    let mut driver = HeadlessDriver::new(
        "2.1 Mesa 10.1",
        "GL_ARB_framebuffer_object GL_EXT_framebuffer_object",
    );
    driver
        .expose::<FramebufferFns>("EXT")
        .expose::<RenderbufferFns>("EXT");

    let caps = GraphicsCapabilities::probe(&driver, &ProbeSettings::default()).unwrap();
    assert_eq!(
        caps.entry_points().framebuffer.extension(),
        Some("GL_EXT_framebuffer_object")
    );
}

#[test]
fn lifecycle() {
    setup();

    let driver = desktop_with_extensions();
    let mut caps = GraphicsCapabilities::new();

    assert_eq!(caps.state(), ProbeState::Uninitialized);
    assert!(!caps.is_supported(Capability::Framebuffer));
    match caps.require(Capability::Framebuffer) {
        Err(Error::NotProbed) => {}
        v => panic!("unexpected result {:?}", v),
    }
    assert!(caps.flags().is_err());

    caps.initialize(&driver, &ProbeSettings::default()).unwrap();
    assert_eq!(caps.state(), ProbeState::Finalized);

    match caps.initialize(&driver, &ProbeSettings::default()) {
        Err(Error::AlreadyProbed) => {}
        v => panic!("unexpected result {:?}", v),
    }

    // A new context gets a fresh instance which probes to the same result.
    let again = GraphicsCapabilities::probe(&driver, &ProbeSettings::default()).unwrap();
    assert_eq!(again.flags().unwrap(), caps.flags().unwrap());
}

#[test]
fn disabled_by_settings() {
    setup();

    let driver = desktop_with_extensions();
    let settings = ProbeSettings {
        mandatory: vec![Capability::Framebuffer],
        disabled: vec![Capability::Renderbuffer],
        dump_information: true,
    };

    let caps = GraphicsCapabilities::probe(&driver, &settings).unwrap();
    assert!(caps.is_supported(Capability::Framebuffer));
    assert!(!caps.is_supported(Capability::Renderbuffer));
    assert!(caps.renderbuffer().is_err());
}

#[test]
fn silent_driver() {
    setup();

    let driver = HeadlessDriver::silent();
    let caps = GraphicsCapabilities::probe(&driver, &optional_only()).unwrap();

    assert_eq!(caps.version(), None);
    assert_eq!(caps.flags().unwrap(), CapabilityFlags::default());
}

#[test]
fn malformed_version_disables_core_features() {
    setup();

    let mut driver = HeadlessDriver::new("unknown", "");
    driver.expose::<FramebufferFns>("").expose::<RenderbufferFns>("");

    let caps = GraphicsCapabilities::probe(&driver, &optional_only()).unwrap();
    assert_eq!(caps.version(), None);
    assert!(!caps.is_supported(Capability::Framebuffer));
}

#[test]
fn framebuffer_status() {
    setup();

    let driver = desktop_with_extensions();
    let caps = GraphicsCapabilities::probe(&driver, &ProbeSettings::default()).unwrap();

    let fbo = caps.framebuffer().unwrap();
    let rbo = caps.renderbuffer().unwrap();
    let (mut fb, mut rb) = (0, 0);

    unsafe {
        (fbo.gen_framebuffers)(1, &mut fb);
        (fbo.bind_framebuffer)(glcaps::consts::FRAMEBUFFER, fb);
        (rbo.gen_renderbuffers)(1, &mut rb);
        (rbo.bind_renderbuffer)(glcaps::consts::RENDERBUFFER, rb);
        (rbo.renderbuffer_storage)(
            glcaps::consts::RENDERBUFFER,
            glcaps::consts::DEPTH_COMPONENT16,
            64,
            64,
        );
        (fbo.framebuffer_renderbuffer)(
            glcaps::consts::FRAMEBUFFER,
            glcaps::consts::DEPTH_ATTACHMENT,
            glcaps::consts::RENDERBUFFER,
            rb,
        );

        assert_eq!(
            fbo.status(glcaps::consts::FRAMEBUFFER),
            FramebufferStatus::Complete
        );
    }

    assert!(fb != 0 && rb != 0 && fb != rb);
}
