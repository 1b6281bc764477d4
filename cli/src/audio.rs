//! Tone playback through rodio
//!
//! Each cue gets its own detached `Sink`, so playback never blocks the tick
//! loop. Gaps between tones in a cue are filled with silence.

use std::time::Duration;

use intervals_core::{AudioError, Tone, ToneOutput};
use rodio::source::{SineWave, Source, Zero};
use rodio::{OutputStream, OutputStreamHandle, Sink};

/// Peak amplitude of a tone before the volume setting is applied
const TONE_AMPLITUDE: f32 = 0.3;

const SILENCE_SAMPLE_RATE: u32 = 48_000;

/// Audio output on the default device.
///
/// Not `Send`: the stream must stay on the thread that opened it.
pub struct RodioOutput {
    // Dropping the stream silences every sink
    _stream: OutputStream,
    handle: OutputStreamHandle,
    gain: f32,
}

impl RodioOutput {
    /// Open the default output device with a 0.0-1.0 volume
    pub fn open(gain: f32) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default().map_err(|e| AudioError::Unavailable {
            reason: e.to_string(),
        })?;
        Ok(Self {
            _stream: stream,
            handle,
            gain: gain.clamp(0.0, 1.0),
        })
    }
}

impl ToneOutput for RodioOutput {
    fn play(&mut self, tones: &[Tone]) -> Result<(), AudioError> {
        let sink = Sink::try_new(&self.handle)
            .map_err(|e| AudioError::Playback(e.to_string().into()))?;
        sink.set_volume(self.gain);

        let mut cursor = Duration::ZERO;
        for tone in tones {
            if tone.offset > cursor {
                sink.append(
                    Zero::<f32>::new(1, SILENCE_SAMPLE_RATE).take_duration(tone.offset - cursor),
                );
                cursor = tone.offset;
            }
            sink.append(
                SineWave::new(tone.frequency_hz)
                    .take_duration(tone.duration)
                    .amplify(TONE_AMPLITUDE),
            );
            cursor += tone.duration;
        }

        sink.detach();
        Ok(())
    }
}
