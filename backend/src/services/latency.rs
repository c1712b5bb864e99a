//! # 인위적 지연(Latency) 전략
//!
//! Mock API의 모든 작업은 응답 전에 이 지연을 기다립니다.
//! 테스트에서는 `Latency::None`을 넣어 즉시 응답하게 합니다.

use std::time::Duration;

/// 실제 백엔드를 흉내 낼 때의 기본 지연
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    /// 지연 없음
    None,
    /// 매 호출마다 같은 시간만큼 기다림
    Fixed(Duration),
}

impl Default for Latency {
    fn default() -> Self {
        Latency::Fixed(DEFAULT_LATENCY)
    }
}

impl Latency {
    /// 0이면 `None`, 그 외에는 `Fixed`
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            Latency::None
        } else {
            Latency::Fixed(Duration::from_millis(ms))
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            Latency::None => Duration::ZERO,
            Latency::Fixed(d) => *d,
        }
    }

    pub async fn wait(&self) {
        if let Latency::Fixed(d) = self {
            tokio::time::sleep(*d).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis() {
        assert_eq!(Latency::from_millis(0), Latency::None);
        assert_eq!(
            Latency::from_millis(250),
            Latency::Fixed(Duration::from_millis(250))
        );
        assert_eq!(Latency::default().duration(), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_latency_sleeps() {
        let start = tokio::time::Instant::now();
        Latency::Fixed(Duration::from_millis(500)).wait().await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_latency_returns_immediately() {
        let start = tokio::time::Instant::now();
        Latency::None.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
