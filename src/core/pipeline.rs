use crate::core::{ConfigProvider, PairTable, PeriodicPair, Pipeline, SourceLine, Storage, SwapResult};
use crate::utils::error::{Result, SwapError};

pub struct SwapPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SwapPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn parse_pair(line: &SourceLine) -> Result<PeriodicPair> {
        // 輸入欄位順序為 slave master，輸出交換為 master slave
        let fields: Vec<&str> = line.text.split(' ').collect();

        if fields.len() < 2 {
            return Err(SwapError::MalformedLine {
                line: line.number,
                found: fields.len(),
            });
        }

        // 超過兩欄時只取前兩欄，其餘忽略
        let slave = Self::parse_node_id(fields[0], line.number)?;
        let master = Self::parse_node_id(fields[1], line.number)?;

        Ok(PeriodicPair { master, slave })
    }

    fn parse_node_id(token: &str, line: u64) -> Result<u64> {
        token.parse::<u64>().map_err(|source| SwapError::Parse {
            line,
            token: token.to_string(),
            source,
        })
    }

    fn render_per(pairs: &PairTable) -> String {
        pairs
            .iter()
            .map(|pair| format!("{} {}\n", pair.master, pair.slave))
            .collect()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SwapPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<SourceLine>> {
        let input_path = self.config.input_path();

        tracing::debug!("Reading pairing file: {}", input_path);
        let raw = self.storage.read_file(&input_path).await?;

        // 寬鬆解碼：配對檔只應含 ASCII 數字，個別異常位元組交給解析階段回報
        let text = String::from_utf8_lossy(&raw);

        let lines: Vec<SourceLine> = text
            .lines()
            .enumerate()
            .map(|(idx, text)| SourceLine {
                number: (idx + 1) as u64,
                text: text.to_string(),
            })
            .collect();

        tracing::debug!("Decoded {} lines ({} bytes)", lines.len(), raw.len());

        Ok(lines)
    }

    async fn transform(&self, data: Vec<SourceLine>) -> Result<SwapResult> {
        let expected = data.iter().filter(|line| !line.text.is_empty()).count();

        // 一次預留完整容量，失敗時回報所需的配對數
        let mut pairs = PairTable::new();
        pairs
            .try_reserve(expected)
            .map_err(|source| SwapError::Allocation {
                pairs: expected as u64,
                source,
            })?;

        println!(
            "Reserved {:.3} GB for {} node pairs",
            pairs.reserved_bytes() as f64 / 1e9,
            expected
        );

        for line in &data {
            // 完全空白的行（通常是結尾換行）不是配對資料
            if line.text.is_empty() {
                tracing::debug!("Skipping empty line {}", line.number);
                continue;
            }

            pairs.push(Self::parse_pair(line)?);
        }

        let per_output = Self::render_per(&pairs);

        Ok(SwapResult { pairs, per_output })
    }

    async fn load(&self, result: SwapResult) -> Result<String> {
        let output_path = self.config.output_path();

        tracing::debug!(
            "Writing {} pairs ({} bytes) to {}",
            result.pairs.len(),
            result.per_output.len(),
            output_path
        );

        self.storage
            .write_file(&output_path, result.per_output.as_bytes())
            .await?;

        tracing::debug!("Pairing file saved successfully");
        Ok(output_path)
    }
}
