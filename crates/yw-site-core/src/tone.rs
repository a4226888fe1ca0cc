//! Two-note feedback tones.

/// Oscillator/gain schedule for one tone. Times are seconds from the audio
/// context's current time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub start_hz: f32,
    pub end_hz: f32,
    pub step_at_s: f64,
    pub start_gain: f32,
    pub end_gain: f32,
    pub duration_s: f64,
}

pub const JUMP: ToneSpec = ToneSpec {
    start_hz: 523.25,
    end_hz: 784.0,
    step_at_s: 0.1,
    start_gain: 0.3,
    end_gain: 0.01,
    duration_s: 0.1,
};

pub const COIN: ToneSpec = ToneSpec {
    start_hz: 800.0,
    end_hz: 1000.0,
    step_at_s: 0.05,
    start_gain: 0.3,
    end_gain: 0.01,
    duration_s: 0.1,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Jump,
    Coin,
}

impl Tone {
    pub fn spec(self) -> ToneSpec {
        match self {
            Tone::Jump => JUMP,
            Tone::Coin => COIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_rise_and_decay() {
        for tone in [Tone::Jump, Tone::Coin] {
            let spec = tone.spec();
            assert!(spec.end_hz > spec.start_hz);
            assert!(spec.end_gain < spec.start_gain);
            assert!(spec.end_gain > 0.0, "exponential ramps cannot reach zero");
            assert!(spec.step_at_s <= spec.duration_s);
        }
        assert_eq!(Tone::Coin.spec().step_at_s, 0.05);
    }
}
