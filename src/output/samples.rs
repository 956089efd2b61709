//! Example input documents written by `--generate-example`.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExampleKind {
    Simple,
    Advanced,
    Company,
}

pub fn example_document(kind: ExampleKind) -> &'static str {
    match kind {
        ExampleKind::Simple => EXAMPLE_SIMPLE,
        ExampleKind::Advanced => EXAMPLE_ADVANCED,
        ExampleKind::Company => EXAMPLE_COMPANY,
    }
}

const EXAMPLE_SIMPLE: &str = "network_cidr: 10.1.0.0/16
structure:
  - public
  - private
  - data
  - __placeholder__
metadata:
  public:
    name: PUBLIC
    description: Hosts internet facing resources.
    tier: public
  private:
    name: PRIVATE
    description: Hosts compute resources.
    tier: private
  data:
    name: DATA
    description: Hosts databases.
    tier: data
";

const EXAMPLE_ADVANCED: &str = "network_cidr: 10.1.0.0/16
structure:
  - - - data-1
      - data-2
      - __placeholder__: 2
    - - public-1
      - public-2
      - __placeholder__: 2
    - - internal-1
      - internal-2
      - __placeholder__: 2
    - __placeholder__
  - compute-1
  - compute-2
  - __placeholder__
metadata:
  data-1:
    name: DATA-1
    description: Hosts databases and critical assets that are hosting data in AZ1
    tier: data
  data-2:
    name: DATA-2
    description: Hosts databases and critical assets that are hosting data in AZ2
    tier: data
  public-1:
    name: PUBLIC-1
    description: Hosts internet facing assets in AZ1
    tier: public
  public-2:
    name: PUBLIC-2
    description: Hosts internet facing assets in AZ2
    tier: public
  internal-1:
    name: INTERNAL-1
    description: Hosts company VPN facing assets in AZ1
    tier: private
  internal-2:
    name: INTERNAL-2
    description: Hosts company VPN facing assets in AZ2
    tier: private
  compute-1:
    name: COMPUTE-1
    description: Hosts computing assets in AZ1
    tier: private
  compute-2:
    name: COMPUTE-2
    description: Hosts computing assets in AZ2
    tier: private
";

const EXAMPLE_COMPANY: &str = "network_cidr: 10.0.0.0/8
structure:
  - vpc-1
  - vpc-2
  - - - - vpc-3-data-1
        - vpc-3-data-2
        - __placeholder__: 2
      - - vpc-3-public-1
        - vpc-3-public-2
        - __placeholder__: 2
    - vpc-3-compute-1
    - __placeholder__: 2
  - __placeholder__: 253
metadata:
  vpc-1:
    name: VPC-1
    description: The whole VPC-1 network
  vpc-2:
    name: VPC-2
    description: The whole VPC-2 network
  vpc-3-data-1:
    name: VPC-3-DATA-1
    description: Host VPC-3 databases in AZ1
  vpc-3-data-2:
    name: VPC-3-DATA-2
    description: Host VPC-3 databases in AZ2
  vpc-3-public-1:
    name: VPC-3-PUBLIC-1
    description: Host VPC-3 internet facing assets in AZ1
  vpc-3-public-2:
    name: VPC-3-PUBLIC-2
    description: Host VPC-3 internet facing assets in AZ2
  vpc-3-compute-1:
    name: VPC-3-COMPUTE-1
    description: Host VPC-3 computing assets in AZ1
";
