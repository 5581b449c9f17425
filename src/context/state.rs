use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;

/// 상태 저장소에 보관되는 값
pub type Value = Arc<dyn Any + Send + Sync>;

/// 요청 단위 공유 상태 저장소
///
/// 핸들러가 띄운 백그라운드 스레드와 함께 쓸 수 있도록 복제 가능한 핸들입니다.
/// 복제본은 모두 같은 저장소를 가리킵니다.
#[derive(Clone, Default)]
pub struct State {
    entries: Arc<DashMap<String, Value>>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// 타입이 다르거나 키가 없으면 `None`
    pub fn get_as<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        self.get(key)?.downcast::<T>().ok()
    }

    /// 값을 저장하고 교체된 이전 값을 반환합니다.
    pub fn set<T: Any + Send + Sync>(&self, key: impl Into<String>, value: T) -> Option<Value> {
        self.set_value(key, Arc::new(value))
    }

    pub fn set_value(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        // 샤드 락 안에서 교체되므로 동시 쓰기에서도 이전 값이 정확함
        self.entries.insert(key.into(), value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("len", &self.entries.len())
            .finish()
    }
}
