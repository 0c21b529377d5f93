//! Lua scripts for the DeliveryQueue redis implementation.

// Lua script to atomically tag a job with a fresh sequence id and add it to
// the sorted set. The sequence prefix keeps members unique, so two jobs with
// identical payloads never collapse into one entry; whether a message should
// be sent at all was already decided by the router.
//
// KEYS[1]: sorted set key (queue name)
// KEYS[2]: sequence counter key
// ARGV[1]: serialized job payload
// ARGV[2]: score (deliver-at timestamp in ms)
//
// Returns: the sequence id assigned to the job
pub static PUSH_JOB_SCRIPT: &str = r#"
local queue_key = KEYS[1]
local seq_key = KEYS[2]
local payload = ARGV[1]
local score = tonumber(ARGV[2])

local seq = redis.call('INCR', seq_key)
redis.call('ZADD', queue_key, score, seq .. '|' .. payload)
return seq
"#;

// Lua script to atomically claim the earliest due job. Range lookup and
// removal happen in one script so two dispatchers never claim the same entry.
//
// KEYS[1]: sorted set key (queue name)
// ARGV[1]: now (timestamp in ms); entries with a later score are not yet due
//
// Returns: the claimed entry, or false when nothing is due
pub static CLAIM_DUE_SCRIPT: &str = r#"
local queue_key = KEYS[1]
local now = ARGV[1]

local entries = redis.call('ZRANGEBYSCORE', queue_key, '-inf', now, 'LIMIT', 0, 1)
if #entries == 0 then
    return false
end

redis.call('ZREM', queue_key, entries[1])
return entries[1]
"#;

// Lua script to remove stale jobs from the queue
// Removes all jobs with score (timestamp) older than the provided cutoff
//
// KEYS[1]: sorted set key (queue name)
// ARGV[1]: cutoff score (timestamp) - jobs older than this will be removed
//
// Returns: number of jobs removed
pub static CLEANUP_STALE_JOBS_SCRIPT: &str = r#"
local queue_key = KEYS[1]
local cutoff_score = tonumber(ARGV[1])

local removed = redis.call('ZREMRANGEBYSCORE', queue_key, '-inf', cutoff_score)
return removed
"#;
