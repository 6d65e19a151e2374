use chrono::{DateTime, Duration, Utc};

use crate::utils::deferred::{Deferred, DeferredQueue};

pub const GREETING: &str = "¡Hola! Soy tu asistente de seguridad. ¿En qué puedo ayudarte?";
pub const CANNED_REPLY: &str =
    "Gracias por tu mensaje. Nuestro equipo está procesando tu consulta.";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u32,
    pub text: String,
    pub is_bot: bool,
}

/// Asistente de chat de la pestaña de consejos.
///
/// Cada mensaje enviado programa su propia respuesta enlatada; las respuestas
/// no se coordinan entre si y llegan en orden de vencimiento.
#[derive(Debug, Clone)]
pub struct ChatAssistant {
    visible: bool,
    messages: Vec<ChatMessage>,
    input: String,
    next_id: u32,
    reply_delay: Duration,
    pending_replies: DeferredQueue<()>,
}

impl ChatAssistant {
    pub fn new(reply_delay: Duration) -> ChatAssistant {
        Self {
            visible: true,
            messages: vec![ChatMessage {
                id: 1,
                text: GREETING.to_string(),
                is_bot: true,
            }],
            input: String::new(),
            next_id: 2,
            reply_delay,
            pending_replies: DeferredQueue::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Oculta o muestra el widget sin perder mensajes ni respuestas pendientes.
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies.len()
    }

    /// Envia el texto ingresado. Un texto en blanco se ignora.
    pub fn send(&mut self, now: DateTime<Utc>) -> bool {
        if !self.can_send() {
            return false;
        }

        let text = std::mem::take(&mut self.input);
        let id = self.push_message(text, false);
        self.pending_replies
            .push(Deferred::schedule(now, self.reply_delay, ()));
        tracing::info!(id, "mensaje enviado al asistente");
        true
    }

    /// Entrega las respuestas que ya vencieron. Devuelve cuantas llegaron.
    pub fn tick(&mut self, now: DateTime<Utc>) -> usize {
        let due = self.pending_replies.drain_due(now);
        for _ in &due {
            let id = self.push_message(CANNED_REPLY.to_string(), true);
            tracing::info!(id, "respuesta del asistente entregada");
        }
        due.len()
    }

    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.pending_replies.next_due()
    }

    /// Descarta las respuestas pendientes, por ejemplo al desmontar el widget.
    pub fn cancel_pending(&mut self) {
        if !self.pending_replies.is_empty() {
            tracing::debug!(
                pending = self.pending_replies.len(),
                "se descartan respuestas pendientes del asistente"
            );
        }
        self.pending_replies.cancel_all();
    }

    fn push_message(&mut self, text: String, is_bot: bool) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, text, is_bot });
        id
    }
}
