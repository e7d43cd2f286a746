//! Offline responder used when the chat backend cannot be reached.
//!
//! Answers come from a fixed table of canonical textbook questions. Lookup
//! order for a normalized (trimmed, lowercased) input:
//!
//! 1. exact key match;
//! 2. first key, in table order, that the input contains;
//! 3. first key, in table order, that contains the input's first token;
//! 4. the `default` entry.
//!
//! There is no specificity ranking: the table order decides ties.

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use assistant_types::{
    Result,
    api::{ChatRequest, ChatResponse},
    config::MockConfig,
};

use crate::ports::{ChatBackendPort, ClockPort};

/// Key of the fallback answer; never matched against input.
pub const DEFAULT_KEY: &str = "default";

pub const MOCK_SESSION_PREFIX: &str = "mock-session-";

/// Ordered `(question, answer)` pairs
#[derive(Debug, Clone, Copy)]
pub struct ResponseTable<'a> {
    entries: &'a [(&'a str, &'a str)],
}

impl<'a> ResponseTable<'a> {
    pub const fn new(entries: &'a [(&'a str, &'a str)]) -> Self {
        Self { entries }
    }

    fn keyed(&self) -> impl Iterator<Item = &'a (&'a str, &'a str)> + 'a {
        self.entries.iter().filter(|(key, _)| *key != DEFAULT_KEY)
    }

    pub fn default_answer(&self) -> &'a str {
        self.entries
            .iter()
            .find(|(key, _)| *key == DEFAULT_KEY)
            .map(|(_, answer)| *answer)
            .unwrap_or("")
    }

    pub fn respond(&self, message: &str) -> &'a str {
        let normalized = message.trim().to_lowercase();

        if let Some((_, answer)) = self.keyed().find(|(key, _)| *key == normalized) {
            return *answer;
        }

        if let Some((_, answer)) = self.keyed().find(|(key, _)| normalized.contains(*key)) {
            return *answer;
        }

        // The key must contain the token, not the
        // other way round. "what" therefore hits the first "what ..." key.
        if let Some(token) = normalized.split_whitespace().next() {
            if let Some((_, answer)) = self.keyed().find(|(key, _)| key.contains(token)) {
                return *answer;
            }
        }

        self.default_answer()
    }

    pub fn len(&self) -> usize {
        self.keyed().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub const TEXTBOOK: ResponseTable<'static> = ResponseTable::new(TEXTBOOK_RESPONSES);

/// Answer from the built-in textbook table
pub fn respond(message: &str) -> &'static str {
    TEXTBOOK.respond(message)
}

/// `ChatBackendPort` served entirely from a response table, with simulated
/// network latency.
pub struct MockBackend {
    clock: Rc<dyn ClockPort>,
    config: MockConfig,
    table: ResponseTable<'static>,
    last_session_ms: Cell<i64>,
}

impl MockBackend {
    pub fn new(clock: Rc<dyn ClockPort>, config: MockConfig) -> Self {
        Self::with_table(clock, config, TEXTBOOK)
    }

    pub fn with_table(
        clock: Rc<dyn ClockPort>,
        config: MockConfig,
        table: ResponseTable<'static>,
    ) -> Self {
        Self {
            clock,
            config,
            table,
            last_session_ms: Cell::new(i64::MIN),
        }
    }

    /// Delay for a jitter sample `unit` in `[0, 1)`
    pub fn latency_ms(&self, unit: f64) -> u64 {
        let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
        self.config.min_latency_ms + (unit * self.config.latency_spread_ms as f64) as u64
    }

    /// `mock-session-<millis>`, strictly increasing even within one millisecond
    fn next_session_id(&self) -> String {
        let now = self.clock.now_millis();
        let last = self.last_session_ms.get();
        let stamp = if now > last { now } else { last + 1 };
        self.last_session_ms.set(stamp);
        format!("{}{}", MOCK_SESSION_PREFIX, stamp)
    }
}

#[async_trait(?Send)]
impl ChatBackendPort for MockBackend {
    async fn chat(&self, req: &ChatRequest) -> Result<ChatResponse> {
        let delay = self.latency_ms(self.clock.random_unit());
        self.clock.sleep(delay).await;

        let answer = self.table.respond(&req.message);
        Ok(ChatResponse::new(answer, self.next_session_id()))
    }

    async fn health(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

const TEXTBOOK_RESPONSES: &[(&str, &str)] = &[
    (
        "what is this book about",
        "This book is about Physical AI & Humanoid Robotics. It covers the fundamentals of embodied intelligence, robot control systems, AI applications in robotics, and how artificial intelligence can be integrated with physical systems for real-world applications.",
    ),
    (
        "what is physical ai",
        "Physical AI refers to artificial intelligence systems that interact with the physical world through robots and other embodied agents. It combines machine learning with physical interaction capabilities, focusing on how AI can understand and manipulate physical objects and environments.",
    ),
    (
        "what is humanoid robotics",
        "Humanoid robotics focuses on creating robots with human-like form and capabilities. This includes bipedal locomotion, manipulation, and human-robot interaction. The field explores how robots can move, act, and interact like humans.",
    ),
    (
        "how does robot learning work",
        "Robot learning involves training AI models that allow robots to adapt and improve their behavior based on experience. This includes reinforcement learning, imitation learning, and other techniques. Robots can learn from sensor data, environmental interactions, and human demonstrations.",
    ),
    (
        "what is embodied intelligence",
        "Embodied intelligence is the concept that intelligence emerges from the interaction between an agent and its environment. It emphasizes that physical form and environment are crucial for intelligence, rather than intelligence being purely computational.",
    ),
    (
        "what are the main topics",
        "The main topics include: 1) Introduction to Physical AI, 2) Humanoid Robot Design, 3) Control Systems for Robotics, 4) Sensing and Perception for Robots, 5) Robot Learning and Adaptation, 6) Human-Robot Interaction, 7) Applications of Physical AI.",
    ),
    (
        "what is the difference between ai and physical ai",
        "Traditional AI focuses on computational intelligence and data processing, while Physical AI emphasizes the integration of AI with physical systems. Physical AI considers how intelligence is shaped by physical embodiment, sensorimotor interactions, and environmental constraints.",
    ),
    (
        "what is reinforcement learning for robots",
        "Reinforcement learning in robotics is a method where robots learn optimal behaviors through trial and error, receiving rewards for desirable actions. This approach is particularly powerful for teaching robots complex tasks like walking, manipulation, and navigation in physical environments.",
    ),
    (
        "how do robots perceive their environment",
        "Robots perceive their environment through various sensors including cameras, lidar, ultrasonic sensors, and tactile sensors. These sensors collect data that is processed by perception algorithms to understand the robot's surroundings, identify objects, and navigate safely.",
    ),
    (
        "what is robot path planning",
        "Robot path planning is the process of determining a safe and efficient route for a robot to move from its current location to a goal location. This involves considering obstacles, the robot's physical constraints, and environmental conditions.",
    ),
    (
        "how do humanoid robots maintain balance",
        "Humanoid robots maintain balance using control algorithms that process data from sensors like gyroscopes, accelerometers, and force/torque sensors. Advanced control techniques like the Zero Moment Point (ZMP) and Linear Inverted Pendulum models help maintain stability during walking and standing.",
    ),
    (
        "what is computer vision for robotics",
        "Computer vision for robotics involves processing images and video to enable robots to recognize objects, navigate environments, and interact with physical objects. It includes object detection, tracking, 3D reconstruction, and scene understanding.",
    ),
    (
        "what are the challenges in robotics",
        "Key challenges include robust perception in dynamic environments, real-time processing for control, energy efficiency, safety, and developing systems that can adapt to novel situations. Integration of multiple complex subsystems is also challenging.",
    ),
    (
        DEFAULT_KEY,
        "Hello! I am your AI assistant for the Physical AI & Humanoid Robotics textbook. I am here to help you understand concepts related to robot learning, control systems, computer vision, human-robot interaction, and other relevant topics. Please feel free to ask any questions you may have about the material.",
    ),
];
