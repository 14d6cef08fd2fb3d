
/// Bytes of atlas data per synthesized container
pub const CHUNK_SIZE: usize = 327_680;

/// Length of the legacy PVR header prepended to every chunk
pub const HEADER_LEN: usize = 52;

/// Legacy (v2) PVR header shared by every chunk of an atlas.
///
/// Little-endian u32 fields: header size (52), height (1024), width (1024),
/// mipmap count (0), flags (0x00010218: PVRTC 2bpp, twiddled, vertically
/// flipped), data size (262144), bit count (2), r/g/b/a masks (0),
/// magic `PVR!`, surface count (1).
pub const PVR_HEADER: [u8; HEADER_LEN] = [
    0x34, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x18, 0x02, 0x01, 0x00, 0x00, 0x00, 0x04, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x50, 0x56, 0x52, 0x21,
    0x01, 0x00, 0x00, 0x00,
];

/// Build a standalone container: header followed by the raw payload.
///
/// The payload is copied as-is; nothing about its layout is checked.
pub fn synthesize(payload: &[u8]) -> Vec<u8> {
    let mut container = Vec::with_capacity(HEADER_LEN + payload.len());
    container.extend_from_slice(&PVR_HEADER);
    container.extend_from_slice(payload);
    container
}

/// Return the payload of a synthesized container, or `None` if the bytes
/// do not start with [`PVR_HEADER`].
pub fn payload(container: &[u8]) -> Option<&[u8]> {
    container.strip_prefix(&PVR_HEADER[..])
}
