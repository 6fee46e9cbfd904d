use crate::domain::model::{SourceLine, SwapResult, INPUT_SUFFIX, OUTPUT_SUFFIX};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn case_name(&self) -> &str;

    /// 由 case 名稱導出輸入檔路徑（<case>.per.dat）
    fn input_path(&self) -> String {
        format!("{}{}", self.case_name(), INPUT_SUFFIX)
    }

    /// 由 case 名稱導出輸出檔路徑（<case>.per）
    fn output_path(&self) -> String {
        format!("{}{}", self.case_name(), OUTPUT_SUFFIX)
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SourceLine>>;
    async fn transform(&self, data: Vec<SourceLine>) -> Result<SwapResult>;
    async fn load(&self, result: SwapResult) -> Result<String>;
}
