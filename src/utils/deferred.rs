use chrono::{DateTime, Duration, Utc};

/// Una continuacion diferida: un valor que se entrega recien cuando llega su
/// hora de vencimiento.
///
/// No hay threads ni timers: el duenio la consulta en cada frame con `poll`.
/// Cancelarla es simplemente soltarla (drop), por eso cada componente guarda
/// las suyas y las descarta al cerrarse.
#[derive(Debug, Clone, PartialEq)]
pub struct Deferred<T> {
    due: DateTime<Utc>,
    payload: Option<T>,
}

impl<T> Deferred<T> {
    /// Si el vencimiento no entra en el rango de fechas, queda en la fecha maxima.
    pub fn schedule(now: DateTime<Utc>, delay: Duration, payload: T) -> Deferred<T> {
        Self {
            due: now
                .checked_add_signed(delay)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            payload: Some(payload),
        }
    }

    pub fn due_at(&self) -> DateTime<Utc> {
        self.due
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.payload.is_some() && now >= self.due
    }

    /// Entrega el valor una unica vez, cuando ya vencio.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<T> {
        if self.is_due(now) {
            self.payload.take()
        } else {
            None
        }
    }
}

/// Conjunto de continuaciones independientes del mismo tipo.
/// Cada una vence por su cuenta; no se coordinan entre si.
#[derive(Debug, Clone, PartialEq)]
pub struct DeferredQueue<T> {
    pending: Vec<Deferred<T>>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T> DeferredQueue<T> {
    pub fn push(&mut self, deferred: Deferred<T>) {
        self.pending.push(deferred);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Proximo vencimiento, para pedirle a la UI que vuelva a dibujar a tiempo.
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.pending.iter().map(Deferred::due_at).min()
    }

    /// Saca todas las continuaciones vencidas, ordenadas por vencimiento.
    pub fn drain_due(&mut self, now: DateTime<Utc>) -> Vec<T> {
        let (mut due, pending): (Vec<Deferred<T>>, Vec<Deferred<T>>) = self
            .pending
            .drain(..)
            .partition(|deferred| deferred.is_due(now));
        self.pending = pending;

        due.sort_by_key(Deferred::due_at);
        due.into_iter()
            .filter_map(|mut deferred| deferred.poll(now))
            .collect()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_01_deferred_fires_once_after_delay() {
        let mut deferred = Deferred::schedule(start(), Duration::seconds(1), "listo");

        assert_eq!(deferred.poll(start()), None);
        assert_eq!(deferred.poll(start() + Duration::seconds(1)), Some("listo"));
        assert_eq!(deferred.poll(start() + Duration::seconds(2)), None);
    }

    #[test]
    fn test_02_huge_delay_saturates_instead_of_overflowing() {
        let mut deferred = Deferred::schedule(start(), Duration::days(1_000_000_000), "nunca");

        assert_eq!(deferred.due_at(), DateTime::<Utc>::MAX_UTC);
        assert_eq!(deferred.poll(start() + Duration::days(365)), None);
    }

    #[test]
    fn test_03_queue_drains_in_due_order() {
        let mut queue = DeferredQueue::default();
        queue.push(Deferred::schedule(start(), Duration::milliseconds(1500), 2));
        queue.push(Deferred::schedule(start(), Duration::milliseconds(1000), 1));
        queue.push(Deferred::schedule(start(), Duration::milliseconds(5000), 3));

        assert_eq!(queue.next_due(), Some(start() + Duration::milliseconds(1000)));

        let delivered = queue.drain_due(start() + Duration::seconds(2));

        assert_eq!(delivered, vec![1, 2]);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_04_cancel_all_drops_pending() {
        let mut queue = DeferredQueue::default();
        queue.push(Deferred::schedule(start(), Duration::seconds(1), ()));
        queue.cancel_all();

        assert!(queue.is_empty());
        assert!(queue.drain_due(start() + Duration::seconds(10)).is_empty());
    }
}
