//! Integration tests for the inventory service over the in-memory stores.
//!
//! Covers: mutation → store → ledger for every operation. The part-store
//! write and the ledger append are deliberately two independent,
//! non-transactional steps (inherited behavior) — these tests exercise the
//! happy path where both land, and the failure paths where neither does.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sparestock_core::{DomainError, PartId};
    use sparestock_inventory::{Category, PartDraft};
    use sparestock_ledger::MovementKind;
    use sparestock_metrics::AbcClass;

    use crate::in_memory::{InMemoryPartStore, InMemoryTransactionStore};
    use crate::service::InventoryService;
    use crate::store::TransactionStore;

    type Service = InventoryService<Arc<InMemoryPartStore>, Arc<InMemoryTransactionStore>>;

    fn setup() -> (Service, Arc<InMemoryTransactionStore>) {
        let parts = Arc::new(InMemoryPartStore::new());
        let ledger = Arc::new(InMemoryTransactionStore::new());
        (InventoryService::new(parts, ledger.clone()), ledger)
    }

    fn draft(sku: &str, current_stock: u32) -> PartDraft {
        PartDraft {
            name: format!("Part {sku}"),
            sku: sku.to_string(),
            category: Category::General,
            annual_demand: 1200.0,
            ordering_cost: 50.0,
            unit_price: 20.0,
            holding_cost_rate: 20.0,
            lead_time_days: 10,
            safety_stock: 15,
            current_stock,
        }
    }

    #[test]
    fn create_persists_the_part_and_logs_created_with_initial_stock() {
        let (service, ledger) = setup();

        let part = service.create(draft("BRG-1", 40)).unwrap();
        assert_eq!(service.get(part.id()).unwrap().current_stock(), 40);

        let records = ledger.all_descending().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind(), MovementKind::Created);
        assert_eq!(records[0].quantity(), 40);
        assert_eq!(records[0].sku(), "BRG-1");
        assert_eq!(records[0].item_name(), "Part BRG-1");
    }

    #[test]
    fn duplicate_sku_is_a_conflict_and_logs_nothing() {
        let (service, ledger) = setup();
        service.create(draft("BRG-1", 40)).unwrap();

        let err = service.create(draft("BRG-1", 10)).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // Only the first CREATED record exists.
        assert_eq!(ledger.all_descending().unwrap().len(), 1);
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn invalid_draft_is_rejected_before_any_write() {
        let (service, ledger) = setup();

        let err = service
            .create(PartDraft {
                unit_price: 0.0,
                ..draft("BAD-1", 5)
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(service.list().unwrap().is_empty());
        assert!(ledger.all_descending().unwrap().is_empty());
    }

    #[test]
    fn consume_decrements_and_logs_out_with_the_delta() {
        let (service, ledger) = setup();
        let part = service.create(draft("BRG-1", 40)).unwrap();

        let updated = service.consume(part.id(), 15).unwrap();
        assert_eq!(updated.current_stock(), 25);

        let records = ledger.all_descending().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind(), MovementKind::Out);
        assert_eq!(records[0].quantity(), 15);
    }

    #[test]
    fn consume_exactly_current_stock_succeeds_and_empties() {
        let (service, _) = setup();
        let part = service.create(draft("BRG-1", 40)).unwrap();

        let updated = service.consume(part.id(), 40).unwrap();
        assert_eq!(updated.current_stock(), 0);
    }

    #[test]
    fn over_consume_mutates_nothing_and_logs_nothing() {
        let (service, ledger) = setup();
        let part = service.create(draft("BRG-1", 40)).unwrap();

        let err = service.consume(part.id(), 41).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                requested: 41,
                available: 40
            }
        );

        assert_eq!(service.get(part.id()).unwrap().current_stock(), 40);
        // Just the CREATED record; the failed dispatch left no trace.
        assert_eq!(ledger.all_descending().unwrap().len(), 1);
    }

    #[test]
    fn restock_increments_and_logs_in_with_the_delta() {
        let (service, ledger) = setup();
        let part = service.create(draft("BRG-1", 40)).unwrap();

        let updated = service.restock(part.id(), 60).unwrap();
        assert_eq!(updated.current_stock(), 100);

        let records = ledger.all_descending().unwrap();
        assert_eq!(records[0].kind(), MovementKind::In);
        assert_eq!(records[0].quantity(), 60);
    }

    #[test]
    fn zero_quantity_mutations_are_validation_errors() {
        let (service, ledger) = setup();
        let part = service.create(draft("BRG-1", 40)).unwrap();

        assert!(matches!(
            service.consume(part.id(), 0).unwrap_err(),
            DomainError::Validation(_)
        ));
        assert!(matches!(
            service.restock(part.id(), 0).unwrap_err(),
            DomainError::Validation(_)
        ));
        assert_eq!(ledger.all_descending().unwrap().len(), 1);
    }

    #[test]
    fn unknown_part_is_not_found_for_every_mutation() {
        let (service, _) = setup();
        let ghost = PartId::new();

        assert_eq!(service.consume(ghost, 1).unwrap_err(), DomainError::NotFound);
        assert_eq!(service.restock(ghost, 1).unwrap_err(), DomainError::NotFound);
        assert_eq!(service.delete(ghost).unwrap_err(), DomainError::NotFound);
        assert_eq!(service.get(ghost).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn delete_logs_the_stock_snapshot_then_removes_the_part() {
        let (service, ledger) = setup();
        let part = service.create(draft("BRG-1", 40)).unwrap();
        service.consume(part.id(), 15).unwrap();

        service.delete(part.id()).unwrap();

        assert_eq!(service.get(part.id()).unwrap_err(), DomainError::NotFound);
        let records = ledger.all_descending().unwrap();
        assert_eq!(records[0].kind(), MovementKind::Deleted);
        // Snapshot of the remaining stock, not a delta.
        assert_eq!(records[0].quantity(), 25);
    }

    #[test]
    fn ledger_records_survive_part_deletion() {
        let (service, ledger) = setup();
        let part = service.create(draft("BRG-1", 40)).unwrap();
        service.restock(part.id(), 10).unwrap();
        service.delete(part.id()).unwrap();

        let records = ledger.all_descending().unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.sku() == "BRG-1"));
    }

    #[test]
    fn every_operation_appends_exactly_one_matching_record() {
        let (service, ledger) = setup();
        let part = service.create(draft("BRG-1", 40)).unwrap();
        service.restock(part.id(), 5).unwrap();
        service.consume(part.id(), 3).unwrap();
        service.delete(part.id()).unwrap();

        let mut kinds: Vec<MovementKind> = ledger
            .all_descending()
            .unwrap()
            .iter()
            .map(|r| r.kind())
            .collect();
        kinds.reverse();
        assert_eq!(
            kinds,
            vec![
                MovementKind::Created,
                MovementKind::In,
                MovementKind::Out,
                MovementKind::Deleted,
            ]
        );
    }

    #[test]
    fn movement_today_sums_only_in_and_out() {
        let (service, _) = setup();
        let part = service.create(draft("BRG-1", 40)).unwrap();
        service.restock(part.id(), 12).unwrap();
        service.restock(part.id(), 8).unwrap();
        service.consume(part.id(), 5).unwrap();

        let movement = service.movement_today().unwrap();
        // The CREATED record (quantity 40) is not movement.
        assert_eq!(movement.received, 20);
        assert_eq!(movement.dispatched, 5);
    }

    #[test]
    fn abc_report_reflects_the_live_collection() {
        let (service, _) = setup();
        service
            .create(PartDraft {
                annual_demand: 700.0,
                unit_price: 10.0,
                ..draft("MOT-1", 10)
            })
            .unwrap();
        service
            .create(PartDraft {
                annual_demand: 200.0,
                unit_price: 10.0,
                ..draft("BLT-1", 10)
            })
            .unwrap();
        service
            .create(PartDraft {
                annual_demand: 100.0,
                unit_price: 10.0,
                ..draft("WSH-1", 10)
            })
            .unwrap();

        let report = service.abc_report().unwrap();
        assert_eq!(report.counts.total(), 3);
        assert_eq!(report.entries[0].sku, "MOT-1");
        assert_eq!(report.entries[0].class, AbcClass::A);
    }

    #[test]
    fn value_report_tracks_stock_and_usage() {
        let (service, _) = setup();
        let part = service.create(draft("BRG-1", 40)).unwrap();

        let before = service.value_report().unwrap();
        assert_eq!(before.stock_value, 40.0 * 20.0);
        assert_eq!(before.total_usage_value, 1200.0 * 20.0);
        assert_eq!(before.part_count, 1);

        service.consume(part.id(), 10).unwrap();
        let after = service.value_report().unwrap();
        assert_eq!(after.stock_value, 30.0 * 20.0);
    }
}
