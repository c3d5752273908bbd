use super::sinks::{PlotSample, PlotSink};

/// Collects plot samples until a front-end drains them
#[derive(Clone, Debug, Default)]
pub struct PlotBuffer {
    samples: Vec<PlotSample>,
}

impl PlotBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[PlotSample] {
        &self.samples
    }

    pub fn drain(&mut self) -> Vec<PlotSample> {
        std::mem::take(&mut self.samples)
    }

    /// Drain as a JSON array of `{body, quantity, time, value}`
    pub fn drain_json(&mut self) -> String {
        let samples = self.drain();
        serde_json::to_string(&samples).unwrap_or_else(|_| "[]".to_string())
    }
}

impl PlotSink for PlotBuffer {
    fn sample(&mut self, sample: PlotSample) {
        self.samples.push(sample);
    }
}
