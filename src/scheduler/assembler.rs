//! Slot-by-slot exam generation.
//!
//! # Algorithm
//!
//! 1. Queue the students in input order.
//! 2. Ask the cursor for the next exam window.
//! 3. Keep rooms that are in service and free in that window, largest first.
//! 4. Pack queued students into those rooms.
//! 5. Staff the slot: least-loaded free proctors, paired with rooms in
//!    order, and one rotated grader per room.
//! 6. Repeat until the queue is empty or the horizon is reached.
//!
//! Windows with no free room are skipped without touching the queue.
//!
//! # Complexity
//! O(w * (r log r + p log p)) where w=windows examined, r=rooms, p=proctors.

use std::collections::{HashSet, VecDeque};

use log::{debug, info, warn};

use super::{ExamTiming, GraderRotator, ProctorBalancer, RoomPacker, RunContext, TimeWindowCursor};
use crate::availability::{CommittedSchedule, NoCommitments, RoomAvailabilityChecker};
use crate::config::SchedulerConfig;
use crate::models::{
    ExamSchedule, GeneratedSlot, ProctorAssignment, Room, RoomAssignment, Student, Teacher,
    Termination, TimeWindow,
};

/// Drives the cursor, packer, and staffing steps into a list of slots.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use exam_schedule::models::{Room, Student, Teacher};
/// use exam_schedule::scheduler::{ExamTiming, SlotAssembler};
///
/// let students: Vec<Student> = (0..25).map(|i| Student::new(format!("S{i}"))).collect();
/// let rooms = vec![Room::new("A", 15), Room::new("B", 10)];
/// let proctors = vec![Teacher::new("T1"), Teacher::new("T2")];
/// let graders = vec![Teacher::new("G1")];
/// let timing = ExamTiming::new(
///     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
///     60,
///     15,
/// );
///
/// let schedule =
///     SlotAssembler::unconstrained().schedule(&students, &rooms, &proctors, &graders, &timing);
/// assert_eq!(schedule.slot_count(), 1);
/// assert!(schedule.is_complete());
/// ```
#[derive(Debug)]
pub struct SlotAssembler<'a, C: ?Sized> {
    committed: &'a C,
    config: SchedulerConfig,
    packer: RoomPacker,
    balancer: ProctorBalancer,
    rotator: GraderRotator,
}

impl SlotAssembler<'static, NoCommitments> {
    /// Creates an assembler with no prior reservations.
    pub fn unconstrained() -> Self {
        Self::new(&NoCommitments)
    }
}

impl<'a, C: CommittedSchedule + ?Sized> SlotAssembler<'a, C> {
    /// Creates an assembler reading prior reservations from `committed`.
    pub fn new(committed: &'a C) -> Self {
        Self {
            committed,
            config: SchedulerConfig::default(),
            packer: RoomPacker::new(),
            balancer: ProctorBalancer::new(),
            rotator: GraderRotator::new(),
        }
    }

    /// Sets the run configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Generates slots until every student is seated or the horizon is hit.
    pub fn schedule(
        &self,
        students: &[Student],
        rooms: &[Room],
        proctors: &[Teacher],
        graders: &[Teacher],
        timing: &ExamTiming,
    ) -> ExamSchedule {
        let mut schedule = ExamSchedule::new();
        let mut queue: VecDeque<Student> = students.iter().cloned().collect();
        let mut ctx = RunContext::new(graders).with_commitments(proctors, self.committed);
        let mut cursor =
            TimeWindowCursor::new(*timing).with_skip_weekends(self.config.skip_weekends);
        let checker = RoomAvailabilityChecker::new(self.committed);

        // First occurrence wins when a room ID repeats.
        let mut seen = HashSet::new();
        let in_service: Vec<Room> = rooms
            .iter()
            .filter(|r| r.is_in_service() && seen.insert(r.id.as_str()))
            .cloned()
            .collect();

        info!(
            "generating exam slots: {} students, {} rooms ({} in service), {} proctors, {} graders",
            students.len(),
            rooms.len(),
            in_service.len(),
            proctors.len(),
            graders.len()
        );

        let mut iterations: u32 = 0;
        while !queue.is_empty() {
            if iterations >= self.config.max_iterations {
                warn!("iteration cap {} reached", self.config.max_iterations);
                schedule.termination = Termination::HorizonExhausted;
                break;
            }
            iterations += 1;

            let Some(window) = cursor.next_window() else {
                warn!("exam duration does not fit in the daily window");
                schedule.termination = Termination::HorizonExhausted;
                break;
            };
            if cursor.days_elapsed() > i64::from(self.config.max_days) {
                warn!("day horizon {} reached on {}", self.config.max_days, window.date());
                schedule.termination = Termination::HorizonExhausted;
                break;
            }

            let available = checker.available_rooms(&in_service, &window);
            if available.is_empty() {
                debug!("no room free for {:?}, skipping", window);
                continue;
            }

            let room_assignments = self.packer.pack(&available, &mut queue);
            if room_assignments.is_empty() {
                continue;
            }

            let slot = self.assemble(window, room_assignments, proctors, &mut ctx);
            debug!(
                "slot {} {}-{}: {} students in {} rooms, {} left",
                slot.date,
                slot.start_time,
                slot.end_time,
                slot.student_count(),
                slot.rooms.len(),
                queue.len()
            );
            schedule.add_slot(slot);
        }

        schedule.unplaced_students = queue.into_iter().collect();
        info!(
            "generated {} slots, {} students placed, {} unplaced",
            schedule.slot_count(),
            schedule.placed_student_count(),
            schedule.unplaced_students.len()
        );
        schedule
    }

    /// Staffs a packed window and builds its slot record.
    fn assemble(
        &self,
        window: TimeWindow,
        rooms: Vec<RoomAssignment>,
        proctors: &[Teacher],
        ctx: &mut RunContext,
    ) -> GeneratedSlot {
        let picked = self.balancer.assign(proctors, rooms.len(), &window, ctx);
        let graders = self.rotator.assign(&rooms, ctx);

        let proctors: Vec<ProctorAssignment> = picked
            .into_iter()
            .zip(rooms.iter())
            .map(|(p, room)| p.with_room(room.room_id.clone()))
            .collect();

        let mut slot = GeneratedSlot::new(&window);
        slot.rooms = rooms;
        slot.proctors = proctors;
        slot.graders = graders;
        slot
    }
}
