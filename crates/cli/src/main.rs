use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use corvus_codec::{PaymentPayload, TxPayload};
use corvus_crypto::{sign_payload, verify_payload, KeyPair};
use corvus_types::{Address, ChainId, ContractId, TokenId, FEE_SCALE, PAYMENT_FEE};

fn usage() {
    eprintln!(
        "usage:
  corvus keygen [--seed <text>] [--chain mainnet|testnet]
  corvus address <public-key-b58> [--chain mainnet|testnet]
  corvus token-id <contract-id-b58> <index>
  corvus sign-payment --secret <b58> --recipient <address-b58> --amount <u64>
                      [--fee <u64>] [--attachment <text>] [--timestamp <ns>]

examples:
  corvus keygen --seed \"manage pony cluster brief\" --chain testnet
  corvus token-id CEzhQViAbnbLLYP3CB9yukHfCZiCSoqLC5U 0
  corvus sign-payment --secret <b58> --recipient <addr> --amount 100000000
"
    );
}

fn parse_u64(opt: Option<String>, what: &str) -> u64 {
    let Some(s) = opt else {
        panic!("missing value for {what}");
    };
    s.parse::<u64>()
        .unwrap_or_else(|_| panic!("invalid {what}: {s}"))
}

fn parse_chain(opt: Option<String>) -> ChainId {
    match opt.as_deref() {
        None | Some("mainnet") => ChainId::Mainnet,
        Some("testnet") => ChainId::Testnet,
        Some(other) => panic!("unknown chain: {other}"),
    }
}

fn decode_pubkey(s: &str) -> [u8; 32] {
    let bytes = bs58::decode(s)
        .into_vec()
        .unwrap_or_else(|e| panic!("invalid public key: {e}"));
    bytes
        .as_slice()
        .try_into()
        .unwrap_or_else(|_| panic!("public key must be 32 bytes, got {}", bytes.len()))
}

fn now_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before epoch")
        .as_nanos() as u64
}

fn main() {
    let mut args = env::args().skip(1);
    let Some(cmd) = args.next() else {
        usage();
        return;
    };

    match cmd.as_str() {
        "keygen" => {
            let rest: Vec<String> = args.collect();
            let mut seed: Option<String> = None;
            let mut chain: Option<String> = None;

            let mut i = 0;
            while i < rest.len() {
                match rest[i].as_str() {
                    "--seed" => {
                        seed = rest.get(i + 1).cloned();
                        i += 2;
                    }
                    "--chain" => {
                        chain = rest.get(i + 1).cloned();
                        i += 2;
                    }
                    other => {
                        panic!("unknown flag: {other}");
                    }
                }
            }

            let chain = parse_chain(chain);
            let kp = match seed {
                Some(seed) => KeyPair::from_account_seed(seed.as_bytes()),
                None => KeyPair::generate(),
            };
            println!("secret  {}", kp.secret_base58());
            println!("public  {}", kp.public_base58());
            println!("address {}", kp.address(chain));
        }

        "address" => {
            let Some(pubkey) = args.next() else {
                usage();
                return;
            };
            let rest: Vec<String> = args.collect();
            let mut chain: Option<String> = None;

            let mut i = 0;
            while i < rest.len() {
                match rest[i].as_str() {
                    "--chain" => {
                        chain = rest.get(i + 1).cloned();
                        i += 2;
                    }
                    other => {
                        panic!("unknown flag: {other}");
                    }
                }
            }

            let addr = Address::from_public_key(&decode_pubkey(&pubkey), parse_chain(chain));
            println!("{addr}");
        }

        "token-id" => {
            let Some(contract) = args.next() else {
                usage();
                return;
            };
            let Some(index) = args.next() else {
                usage();
                return;
            };

            let contract = ContractId::from_base58(&contract)
                .unwrap_or_else(|e| panic!("invalid contract id: {e}"));
            let index: u32 = index
                .parse()
                .unwrap_or_else(|_| panic!("invalid index: {index}"));

            let token = TokenId::from_contract_id(&contract, index);
            println!("token    {token}");
            println!("contract {}", token.contract_id());
            println!("index    {}", token.index());
        }

        "sign-payment" => {
            let rest: Vec<String> = args.collect();
            let mut secret: Option<String> = None;
            let mut recipient: Option<String> = None;
            let mut amount: Option<u64> = None;
            let mut fee: u64 = PAYMENT_FEE;
            let mut attachment = String::new();
            let mut timestamp: Option<u64> = None;

            let mut i = 0;
            while i < rest.len() {
                match rest[i].as_str() {
                    "--secret" => {
                        secret = rest.get(i + 1).cloned();
                        i += 2;
                    }
                    "--recipient" => {
                        recipient = rest.get(i + 1).cloned();
                        i += 2;
                    }
                    "--amount" => {
                        amount = Some(parse_u64(rest.get(i + 1).cloned(), "--amount"));
                        i += 2;
                    }
                    "--fee" => {
                        fee = parse_u64(rest.get(i + 1).cloned(), "--fee");
                        i += 2;
                    }
                    "--attachment" => {
                        attachment = rest.get(i + 1).cloned().unwrap_or_default();
                        i += 2;
                    }
                    "--timestamp" => {
                        timestamp = Some(parse_u64(rest.get(i + 1).cloned(), "--timestamp"));
                        i += 2;
                    }
                    other => {
                        panic!("unknown flag: {other}");
                    }
                }
            }

            let (Some(secret), Some(recipient), Some(amount)) = (secret, recipient, amount)
            else {
                usage();
                return;
            };

            let kp = KeyPair::from_secret_base58(&secret)
                .unwrap_or_else(|e| panic!("invalid secret: {e}"));
            let recipient = Address::from_base58(&recipient)
                .unwrap_or_else(|e| panic!("invalid recipient: {e}"));

            let payload = TxPayload::Payment(PaymentPayload {
                timestamp: timestamp.unwrap_or_else(now_nanos),
                amount,
                fee,
                fee_scale: FEE_SCALE,
                recipient,
                attachment,
            });

            let bytes = payload.to_sign_bytes().expect("encode payment");
            let sig = sign_payload(&kp, &payload).expect("sign payment");
            let ok = verify_payload(kp.public(), &payload, &sig).expect("verify payment");

            println!("sender    {}", kp.public_base58());
            println!("bytes     {}", hex::encode(&bytes));
            println!("signature {}", bs58::encode(sig).into_string());
            println!("verified  {ok}");
        }

        _ => {
            usage();
        }
    }
}
