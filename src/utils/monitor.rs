#[cfg(feature = "cli")]
use std::sync::{Arc, Mutex};
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct ResourceStats {
    pub cpu_usage: f32,
    pub memory_mb: u64,
    pub memory_growth_mb: u64,
    pub peak_memory_mb: u64,
    pub elapsed: Duration,
}

#[cfg(feature = "cli")]
pub struct ResourceMonitor {
    system: Arc<Mutex<System>>,
    pid: Pid,
    started: Instant,
    baseline_memory_mb: u64,
    peak_memory: Arc<Mutex<u64>>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl ResourceMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new_with_specifics(RefreshKind::everything());

        let pid = sysinfo::get_current_pid().expect("Failed to get current PID");

        // 初始刷新，取得啟動時的記憶體基準
        system.refresh_all();
        let baseline_memory_mb = system
            .process(pid)
            .map(|process| process.memory() / 1024 / 1024)
            .unwrap_or(0);

        Self {
            system: Arc::new(Mutex::new(system)),
            pid,
            started: Instant::now(),
            baseline_memory_mb,
            peak_memory: Arc::new(Mutex::new(0)),
            enabled,
        }
    }

    pub fn get_stats(&self) -> Option<ResourceStats> {
        if !self.enabled {
            return None;
        }

        let mut system = self.system.lock().ok()?;
        system.refresh_all();

        let process = system.process(self.pid)?;
        let memory_mb = process.memory() / 1024 / 1024;
        let memory_growth_mb = memory_mb.saturating_sub(self.baseline_memory_mb);

        // 更新峰值記憶體
        let mut peak = self.peak_memory.lock().ok()?;
        if memory_mb > *peak {
            *peak = memory_mb;
        }
        let peak_memory = *peak;

        Some(ResourceStats {
            cpu_usage: process.cpu_usage(),
            memory_mb,
            memory_growth_mb,
            peak_memory_mb: peak_memory,
            elapsed: self.started.elapsed(),
        })
    }

    pub fn log_stats(&self, phase: &str) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB (+{}MB since start), Peak: {}MB, Time: {:?}",
                phase,
                stats.cpu_usage,
                stats.memory_mb,
                stats.memory_growth_mb,
                stats.peak_memory_mb,
                stats.elapsed
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "📊 Conversion stats - Total Time: {:?}, Peak Memory: {}MB",
                stats.elapsed,
                stats.peak_memory_mb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for ResourceMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// 為非CLI環境提供空實現
#[cfg(not(feature = "cli"))]
pub struct ResourceMonitor;

#[cfg(not(feature = "cli"))]
impl ResourceMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(not(feature = "cli"))]
impl Default for ResourceMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
