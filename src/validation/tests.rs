//! Tests for transaction validation
//!
//! Covers each rejection rule, the order in which rules apply, and the
//! internal/external sender distinction.

#[cfg(test)]
mod tests {
    use crate::{
        validation::{TransactionValidator, validate},
        Transaction, ValidationError,
    };

    const LOCAL_ROUTING: &str = "123456789";
    const EXTERNAL_ROUTING: &str = "999999999";
    const AUTHED: &str = "1122334455";

    /// Helper function to create a valid internal transaction sent by AUTHED
    fn create_test_tx(amount: i64) -> Transaction {
        Transaction {
            from_account_num: AUTHED.to_string(),
            from_routing_num: LOCAL_ROUTING.to_string(),
            to_account_num: "9988776655".to_string(),
            to_routing_num: LOCAL_ROUTING.to_string(),
            amount,
        }
    }

    #[test]
    fn test_valid_internal_transfer_is_accepted() {
        let tx = create_test_tx(500);
        assert_eq!(validate(LOCAL_ROUTING, AUTHED, &tx), Ok(()));
    }

    #[test]
    fn test_internal_transfer_from_other_account_is_not_authenticated() {
        let mut tx = create_test_tx(500);
        tx.from_account_num = "9999999999".to_string();

        assert_eq!(
            validate(LOCAL_ROUTING, AUTHED, &tx),
            Err(ValidationError::NotAuthenticated)
        );
    }

    #[test]
    fn test_short_account_number_is_invalid_number() {
        let mut tx = create_test_tx(500);
        tx.from_account_num = "12345".to_string();

        assert_eq!(
            validate(LOCAL_ROUTING, AUTHED, &tx),
            Err(ValidationError::InvalidNumber)
        );
    }

    #[test]
    fn test_malformed_numbers_in_any_field_are_invalid_number() {
        let mutations: [fn(&mut Transaction); 6] = [
            |tx: &mut Transaction| tx.from_account_num = "".to_string(),
            |tx: &mut Transaction| tx.to_account_num = "99887766551".to_string(),
            |tx: &mut Transaction| tx.to_account_num = "99887766x5".to_string(),
            |tx: &mut Transaction| tx.from_routing_num = "12345678".to_string(),
            |tx: &mut Transaction| tx.to_routing_num = "1234567890".to_string(),
            |tx: &mut Transaction| tx.to_routing_num = " 23456789".to_string(),
        ];

        for mutate in mutations {
            let mut tx = create_test_tx(500);
            mutate(&mut tx);
            assert_eq!(
                validate(LOCAL_ROUTING, AUTHED, &tx),
                Err(ValidationError::InvalidNumber),
                "transaction {:?}",
                tx
            );
        }
    }

    #[test]
    fn test_send_to_self_is_rejected() {
        let mut tx = create_test_tx(500);
        tx.to_account_num = AUTHED.to_string();

        assert_eq!(
            validate(LOCAL_ROUTING, AUTHED, &tx),
            Err(ValidationError::SendToSelf)
        );
    }

    #[test]
    fn test_same_account_at_different_bank_is_not_self() {
        let mut tx = create_test_tx(500);
        tx.to_account_num = AUTHED.to_string();
        tx.to_routing_num = EXTERNAL_ROUTING.to_string();

        assert_eq!(validate(LOCAL_ROUTING, AUTHED, &tx), Ok(()));
    }

    #[test]
    fn test_negative_amount_is_invalid() {
        let tx = create_test_tx(-10);
        assert_eq!(
            validate(LOCAL_ROUTING, AUTHED, &tx),
            Err(ValidationError::InvalidAmount)
        );
    }

    #[test]
    fn test_zero_amount_is_invalid_and_one_is_valid() {
        assert_eq!(
            validate(LOCAL_ROUTING, AUTHED, &create_test_tx(0)),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(validate(LOCAL_ROUTING, AUTHED, &create_test_tx(1)), Ok(()));
        assert_eq!(
            validate(LOCAL_ROUTING, AUTHED, &create_test_tx(i64::MIN)),
            Err(ValidationError::InvalidAmount)
        );
    }

    #[test]
    fn test_external_sender_skips_authorization() {
        let mut tx = create_test_tx(500);
        tx.from_routing_num = EXTERNAL_ROUTING.to_string();
        tx.from_account_num = "5555555555".to_string();

        assert_eq!(validate(LOCAL_ROUTING, AUTHED, &tx), Ok(()));
    }

    #[test]
    fn test_format_failure_wins_over_business_rules() {
        // Wrong sender, self transfer and zero amount, but a malformed account number
        let mut tx = create_test_tx(0);
        tx.from_account_num = "123".to_string();
        tx.to_account_num = "123".to_string();

        assert_eq!(
            validate(LOCAL_ROUTING, AUTHED, &tx),
            Err(ValidationError::InvalidNumber)
        );
    }

    #[test]
    fn test_authorization_wins_over_self_transfer_and_amount() {
        let mut tx = create_test_tx(-1);
        tx.from_account_num = "9999999999".to_string();
        tx.to_account_num = "9999999999".to_string();

        assert_eq!(
            validate(LOCAL_ROUTING, AUTHED, &tx),
            Err(ValidationError::NotAuthenticated)
        );
    }

    #[test]
    fn test_self_transfer_wins_over_amount() {
        let mut tx = create_test_tx(0);
        tx.to_account_num = AUTHED.to_string();

        assert_eq!(
            validate(LOCAL_ROUTING, AUTHED, &tx),
            Err(ValidationError::SendToSelf)
        );
    }

    #[test]
    fn test_validator_uses_configured_routing_number() {
        let validator = TransactionValidator::new(EXTERNAL_ROUTING);
        assert_eq!(validator.local_routing_number(), EXTERNAL_ROUTING);

        // LOCAL_ROUTING is now someone else's bank, so any sender passes
        let mut tx = create_test_tx(500);
        tx.from_account_num = "9999999999".to_string();
        assert_eq!(validator.validate(AUTHED, &tx), Ok(()));

        // Sending from the configured bank requires the authenticated account
        tx.from_routing_num = EXTERNAL_ROUTING.to_string();
        assert_eq!(
            validator.validate(AUTHED, &tx),
            Err(ValidationError::NotAuthenticated)
        );
    }

    #[test]
    fn test_validator_is_shareable_across_threads() {
        let validator = std::sync::Arc::new(TransactionValidator::new(LOCAL_ROUTING));

        let handles: Vec<_> = (1..=4)
            .map(|amount| {
                let validator = validator.clone();
                std::thread::spawn(move || validator.validate(AUTHED, &create_test_tx(amount)))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(()));
        }
    }
}
