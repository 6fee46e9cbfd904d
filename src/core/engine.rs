use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::ResourceMonitor;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
    monitor: ResourceMonitor,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: ResourceMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting periodicity conversion...");

        // Extract
        println!("Reading pairing file...");
        let source_lines = self.pipeline.extract().await?;
        println!("Read {} lines", source_lines.len());
        self.monitor.log_stats("Extract");

        // Transform
        println!("Swapping node columns...");
        let swap_result = self.pipeline.transform(source_lines).await?;
        println!("Converted {} node pairs", swap_result.pairs.len());
        self.monitor.log_stats("Transform");

        // Load
        println!("Writing output file...");
        let written_pairs = swap_result.pairs.len();
        let output_path = self.pipeline.load(swap_result).await?;
        println!("Wrote {} lines", written_pairs);
        println!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
