use std::cmp;

use crate::errors::*;

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = self.split();
        let (es2, major2, minor2) = other.split();

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Parses the string reported for `GL_VERSION`.
    ///
    /// Accepts both desktop strings like `"2.1 Mesa 10.1"` and embedded ones like
    /// `"OpenGL ES 2.0 build 1.8@905891"` or `"OpenGL ES-CM 1.1"`.
    pub fn parse(desc: &str) -> Result<Version> {
        let malformed = || Error::MalformedString(desc.to_owned());

        let (es, rest) = if desc.starts_with("OpenGL ES-") {
            // Profile tags like "CM" or "CL" precede the number.
            let rest = &desc[10..];
            (true, rest.splitn(2, ' ').nth(1).ok_or_else(malformed)?)
        } else if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else {
            (false, desc)
        };

        let number = rest.split(' ').next().ok_or_else(malformed)?;
        let mut iter = number.split('.');

        let major = iter.next().and_then(leading_number).ok_or_else(malformed)?;
        let minor = iter.next().and_then(leading_number).ok_or_else(malformed)?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }

    #[inline]
    pub fn is_es(self) -> bool {
        match self {
            Version::ES(_, _) => true,
            Version::GL(_, _) => false,
        }
    }

    #[inline]
    fn split(self) -> (bool, u8, u8) {
        match self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        }
    }
}

#[inline]
fn leading_number(v: &str) -> Option<u8> {
    let end = v.find(|c: char| !c.is_ascii_digit()).unwrap_or_else(|| v.len());
    v[..end].parse().ok()
}
