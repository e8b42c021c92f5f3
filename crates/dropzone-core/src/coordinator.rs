//! The drop coordinator: merges the native and DOM drag bridges into one
//! `over_drop_zone` flag and the upload queue.
//!
//! Every method is one reconciliation step. The caller measures the drop
//! target at processing time and passes the box in; the coordinator never
//! caches geometry, so a box change between events is always picked up.

use crate::file::{DroppedFile, UploadFile};
use crate::geometry::{BoundingBox, Point};

/// Display status derived from queue length and the two drag-active flags.
/// Never stored; always recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropZoneStatus {
    Pending,
    Active,
    Accepting,
}

/// What became of a native file-drop event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropDisposition {
    /// Landed inside the target; file appended to the queue.
    Queued,
    /// Coordinates fell outside the measured box; file discarded.
    OutsideTarget,
    /// Missing path or content; dropped per log-and-drop policy.
    Malformed,
}

#[derive(Debug, Default)]
pub struct DropCoordinator {
    over_drop_zone: bool,
    queue: Vec<UploadFile>,
}

impl DropCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn over_drop_zone(&self) -> bool {
        self.over_drop_zone
    }

    pub fn queue(&self) -> &[UploadFile] {
        &self.queue
    }

    /// Channel A step: a completed native drop.
    pub fn file_dropped(&mut self, payload: DroppedFile, bounds: &BoundingBox) -> DropDisposition {
        if payload.is_malformed() {
            log::warn!("dropping malformed file payload (path or buffer missing)");
            return DropDisposition::Malformed;
        }
        if !bounds.contains(payload.point()) {
            // Stray or late event, e.g. delivered after the pointer already
            // left the window. Lower the flag if a drag-over raised it.
            self.over_drop_zone = false;
            return DropDisposition::OutsideTarget;
        }
        self.queue.push(UploadFile::from_dropped(payload));
        self.over_drop_zone = false;
        DropDisposition::Queued
    }

    /// Channel B step: a live pointer position during a native drag.
    /// Returns true when `over_drop_zone` changed, so the caller can skip
    /// redundant store writes.
    pub fn pointer_drag_over(&mut self, point: Point, bounds: &BoundingBox) -> bool {
        let inside = bounds.contains(point);
        if inside == self.over_drop_zone {
            return false;
        }
        self.over_drop_zone = inside;
        true
    }

    /// Picker, browser-drop, or paste path: append in the order given.
    pub fn files_selected(&mut self, files: Vec<UploadFile>) {
        self.queue.extend(files);
    }

    /// Clears the queue unconditionally.
    pub fn cancel_upload(&mut self) {
        self.queue.clear();
    }

    /// Current display status, merging the DOM bridge's flag by OR at this
    /// projection boundary only.
    pub fn status(&self, is_drag_active: bool) -> DropZoneStatus {
        derive_status(self.queue.len(), is_drag_active, self.over_drop_zone)
    }
}

/// `Accepting` when anything is queued, else `Active` while either bridge
/// reports a drag over the target, else `Pending`.
pub fn derive_status(queue_len: usize, is_drag_active: bool, over_drop_zone: bool) -> DropZoneStatus {
    if queue_len > 0 {
        DropZoneStatus::Accepting
    } else if is_drag_active || over_drop_zone {
        DropZoneStatus::Active
    } else {
        DropZoneStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_box() -> BoundingBox {
        BoundingBox::new(10.0, 20.0, 220.0, 110.0)
    }

    fn payload_at(x: f64, y: f64) -> DroppedFile {
        DroppedFile {
            path: "/home/x/report.pdf".to_string(),
            x,
            y,
            buffer: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_drop_inside_queues_and_lowers_flag() {
        let mut c = DropCoordinator::new();
        let bounds = target_box();
        c.pointer_drag_over(Point::new(50.0, 50.0), &bounds);
        assert!(c.over_drop_zone());

        let disposition = c.file_dropped(payload_at(50.0, 50.0), &bounds);
        assert_eq!(disposition, DropDisposition::Queued);
        assert_eq!(c.queue().len(), 1);
        assert_eq!(c.queue()[0].name, "report.pdf");
        assert_eq!(c.queue()[0].content, vec![1, 2, 3]);
        assert!(!c.over_drop_zone());
    }

    #[test]
    fn test_drop_inside_lowers_flag_even_when_already_low() {
        let mut c = DropCoordinator::new();
        let disposition = c.file_dropped(payload_at(50.0, 50.0), &target_box());
        assert_eq!(disposition, DropDisposition::Queued);
        assert!(!c.over_drop_zone());
    }

    #[test]
    fn test_drop_outside_never_changes_queue() {
        let mut c = DropCoordinator::new();
        let bounds = target_box();
        c.pointer_drag_over(Point::new(50.0, 50.0), &bounds);

        let disposition = c.file_dropped(payload_at(500.0, 500.0), &bounds);
        assert_eq!(disposition, DropDisposition::OutsideTarget);
        assert_eq!(c.queue().len(), 0);
        assert!(!c.over_drop_zone());
    }

    // Observed behavior, not a guaranteed contract: an outside drop lowers
    // the flag even when no drag-over preceded it.
    #[test]
    fn test_outside_drop_without_prior_drag_over_is_noop() {
        let mut c = DropCoordinator::new();
        let disposition = c.file_dropped(payload_at(500.0, 500.0), &target_box());
        assert_eq!(disposition, DropDisposition::OutsideTarget);
        assert_eq!(c.queue().len(), 0);
        assert!(!c.over_drop_zone());
    }

    #[test]
    fn test_malformed_payload_is_dropped_without_queueing() {
        let mut c = DropCoordinator::new();
        let bounds = target_box();
        c.pointer_drag_over(Point::new(50.0, 50.0), &bounds);

        let no_buffer = DroppedFile {
            path: "/home/x/report.pdf".to_string(),
            x: 50.0,
            y: 50.0,
            buffer: Vec::new(),
        };
        let disposition = c.file_dropped(no_buffer, &bounds);
        assert_eq!(disposition, DropDisposition::Malformed);
        assert_eq!(c.queue().len(), 0);
        // A no-op drop: the flag keeps whatever value it had.
        assert!(c.over_drop_zone());
    }

    #[test]
    fn test_drag_over_tracks_most_recent_point() {
        let mut c = DropCoordinator::new();
        let bounds = target_box();

        assert!(c.pointer_drag_over(Point::new(50.0, 50.0), &bounds));
        assert!(c.over_drop_zone());
        // Same classification again: no change reported.
        assert!(!c.pointer_drag_over(Point::new(60.0, 60.0), &bounds));
        assert!(c.pointer_drag_over(Point::new(500.0, 50.0), &bounds));
        assert!(!c.over_drop_zone());
        // Already outside: redundant update suppressed.
        assert!(!c.pointer_drag_over(Point::new(600.0, 50.0), &bounds));
    }

    #[test]
    fn test_drag_over_uses_box_in_effect_at_processing_time() {
        let mut c = DropCoordinator::new();
        c.pointer_drag_over(Point::new(50.0, 50.0), &target_box());
        assert!(c.over_drop_zone());

        // The target moved; the same point now classifies outside.
        let moved = BoundingBox::new(300.0, 300.0, 400.0, 400.0);
        assert!(c.pointer_drag_over(Point::new(50.0, 50.0), &moved));
        assert!(!c.over_drop_zone());
    }

    #[test]
    fn test_drag_over_against_detached_target_stays_outside() {
        let mut c = DropCoordinator::new();
        assert!(!c.pointer_drag_over(Point::new(0.0, 0.0), &BoundingBox::DETACHED));
        assert!(!c.over_drop_zone());
    }

    #[test]
    fn test_files_selected_preserves_order() {
        let mut c = DropCoordinator::new();
        c.files_selected(vec![
            UploadFile {
                name: "a.txt".to_string(),
                content: vec![1],
            },
            UploadFile {
                name: "b.txt".to_string(),
                content: vec![2],
            },
        ]);
        c.files_selected(vec![UploadFile {
            name: "c.txt".to_string(),
            content: vec![3],
        }]);
        let names: Vec<&str> = c.queue().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_cancel_empties_queue_regardless_of_length() {
        let mut c = DropCoordinator::new();
        c.cancel_upload();
        assert_eq!(c.queue().len(), 0);

        c.files_selected(vec![
            UploadFile {
                name: "a.txt".to_string(),
                content: vec![1],
            },
            UploadFile {
                name: "b.txt".to_string(),
                content: vec![2],
            },
        ]);
        c.cancel_upload();
        assert_eq!(c.queue().len(), 0);
    }

    #[test]
    fn test_status_projection_table() {
        assert_eq!(derive_status(0, false, false), DropZoneStatus::Pending);
        assert_eq!(derive_status(0, true, false), DropZoneStatus::Active);
        assert_eq!(derive_status(0, false, true), DropZoneStatus::Active);
        assert_eq!(derive_status(0, true, true), DropZoneStatus::Active);
        assert_eq!(derive_status(2, false, false), DropZoneStatus::Accepting);
        assert_eq!(derive_status(1, true, true), DropZoneStatus::Accepting);
    }

    #[test]
    fn test_status_merges_dom_flag_by_or() {
        let mut c = DropCoordinator::new();
        assert_eq!(c.status(false), DropZoneStatus::Pending);
        assert_eq!(c.status(true), DropZoneStatus::Active);

        c.pointer_drag_over(Point::new(50.0, 50.0), &target_box());
        assert_eq!(c.status(false), DropZoneStatus::Active);
    }
}
