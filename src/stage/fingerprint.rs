use xxhash_rust::xxh3::Xxh3;

use crate::stage::{PinState, Stage};

const XXH3_SEED: u64 = 0x5f3c_a2d1_9e07_b4c3;

/// Stable fingerprint of everything a presentation layer would draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct StageFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

/// Hash element properties, layout, pin state, visibility, nesting and text.
///
/// Element names are not hashed; they never reach the screen.
pub(crate) fn fingerprint_stage(stage: &Stage) -> StageFingerprint {
    let mut h = StableHasher::new();
    for (id, el) in stage.elements() {
        h.write_u32(id.0);
        h.write_f64(el.props.x);
        h.write_f64(el.props.y);
        h.write_f64(el.props.opacity);
        h.write_f64(el.props.scale);
        h.write_f64(el.props.width);
        h.write_f64(el.layout.x0);
        h.write_f64(el.layout.y0);
        h.write_f64(el.layout.x1);
        h.write_f64(el.layout.y1);
        match el.pin {
            PinState::Flow => h.write_u8(0),
            PinState::Pinned { viewport_top } => {
                h.write_u8(1);
                h.write_f64(viewport_top);
            }
            PinState::Released { spacing } => {
                h.write_u8(2);
                h.write_f64(spacing);
            }
        }
        h.write_bool(el.hidden);
        match el.parent {
            Some(parent) => {
                h.write_u8(1);
                h.write_u32(parent.0);
            }
            None => h.write_u8(0),
        }
        match &el.text {
            Some(t) => {
                h.write_u8(1);
                h.write_u64(t.len() as u64);
                h.write_bytes(t.as_bytes());
            }
            None => h.write_u8(0),
        }
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn finish(self) -> StageFingerprint {
        let v = self.inner.digest128();
        StageFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}
